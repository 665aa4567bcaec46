#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod capture;
pub mod draw;
pub mod graph;
pub mod interner;
pub mod surface;

pub use capture::{CaptureFeature, CapturePass, CaptureSettings, DEFAULT_TEXTURE_NAME, SurfaceSettings};
pub use draw::{CullResults, DepthOverride, DrawCommand, DrawFilter, DrawKey, DrawRequest, LayerMask, ObjectDrawer, OverrideDirective, OverrideMode, SortOrder, Technique, VisibleObject, build_draw_list};
pub use draw::{MaterialKey, ObjectKey, ShaderKey};
pub use graph::{CameraData, CameraTarget, ConfigureContext, ExecuteContext, FrameSchedule, PassNode, PassStage};
pub use surface::{CaptureTarget, PublishedTexture, SurfaceBlitter, SurfaceDescriptor, SurfaceSampling, SurfaceSlot, TextureRegistry, Tracked};
