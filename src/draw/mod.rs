//! Object selection and draw-list construction.
//!
//! The host computes visibility ([`CullResults`]); a capture pass narrows it
//! with a [`DrawFilter`], applies an [`OverrideDirective`], and hands the
//! ordered [`DrawCommand`] list back to the host's [`ObjectDrawer`].

pub mod filter;
pub mod list;
pub mod overrides;

use slotmap::new_key_type;

new_key_type! {
    /// Handle of a drawable object in the host's scene storage.
    pub struct ObjectKey;
    /// Handle of a material in the host's asset storage.
    pub struct MaterialKey;
    /// Handle of a shader in the host's asset storage.
    pub struct ShaderKey;
}

pub use filter::{DEFAULT_TECHNIQUES, DrawFilter, LayerMask, Technique};
pub use list::{
    CullResults, DepthOverride, DrawCommand, DrawKey, DrawRequest, ObjectDrawer, SortOrder,
    VisibleObject, build_draw_list,
};
pub use overrides::{OverrideDirective, OverrideMode};
