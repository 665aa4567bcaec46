//! Host-filled contexts for the two pass phases.
//!
//! The host splits each frame into a configure phase (mutable resource work)
//! and an execute phase (command recording). The context structs carry
//! exactly the borrows each phase is allowed to hold.

use crate::draw::list::{CullResults, ObjectDrawer, SortOrder};
use crate::surface::registry::TextureRegistry;

/// Descriptor of the camera's output surface for the current frame.
///
/// Camera-relative targets derive their size from this, so the host must
/// fill it with the post-resize dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraTarget {
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
}

impl CameraTarget {
    #[inline]
    #[must_use]
    pub const fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Execute-phase camera inputs.
pub struct CameraData<'a> {
    /// The camera's visible output; target of the debug composite.
    pub output: &'a wgpu::TextureView,
    /// Format of [`output`](Self::output).
    pub output_format: wgpu::TextureFormat,
    /// The camera's default sort order for opaque geometry.
    pub opaque_order: SortOrder,
}

/// Context for [`PassNode::configure`](crate::graph::node::PassNode::configure).
pub struct ConfigureContext<'a> {
    pub device: &'a wgpu::Device,
    /// Camera surface descriptor driving target sizes this frame.
    pub camera: &'a CameraTarget,
    /// Registry passes publish their outputs into.
    pub registry: &'a mut TextureRegistry,
}

/// Context for [`PassNode::execute`](crate::graph::node::PassNode::execute).
pub struct ExecuteContext<'a> {
    pub device: &'a wgpu::Device,
    /// Host-computed visibility set for this camera.
    pub cull: &'a CullResults,
    pub camera: CameraData<'a>,
    /// Read-only view of the frame's published textures.
    pub registry: &'a TextureRegistry,
    /// Host-side submission surface for object draws.
    pub drawer: &'a mut dyn ObjectDrawer,
}
