//! Offscreen surface descriptors.

use crate::graph::context::CameraTarget;

/// Mip chain ceiling for capture surfaces.
pub const MAX_SURFACE_MIPS: u32 = 4;

/// Allocation key of a capture surface.
///
/// Two descriptors compare equal exactly when an existing allocation can be
/// reused. Sampler state lives in [`SurfaceSampling`] and never forces a
/// reallocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceDescriptor {
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    pub mip_level_count: u32,
}

impl SurfaceDescriptor {
    /// Descriptor for a camera-relative capture surface.
    ///
    /// Dimensions scale from the camera target and never fall below one
    /// pixel; the mip count is [`MAX_SURFACE_MIPS`] clamped to the chain
    /// the extent supports.
    #[must_use]
    pub fn for_camera(camera: &CameraTarget, scale: f32, format: wgpu::TextureFormat) -> Self {
        let (width, height) = scaled_extent(camera.width, camera.height, scale);
        Self {
            width,
            height,
            format,
            mip_level_count: mip_count_for(width, height),
        }
    }

    #[must_use]
    pub const fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}

/// Scales an extent, rounding to nearest and flooring at one pixel.
#[must_use]
pub fn scaled_extent(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let scale_axis = |dim: u32| ((dim as f32 * scale).round() as u32).max(1);
    (scale_axis(width), scale_axis(height))
}

/// Longest valid mip chain for the extent, capped at [`MAX_SURFACE_MIPS`].
///
/// wgpu validates `mip_level_count` against the base extent, so tiny
/// surfaces get shorter chains.
#[must_use]
pub fn mip_count_for(width: u32, height: u32) -> u32 {
    let largest = width.max(height).max(1);
    let full_chain = 32 - largest.leading_zeros();
    MAX_SURFACE_MIPS.min(full_chain)
}

/// Sampler state of a capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSampling {
    pub filter: wgpu::FilterMode,
    pub address: wgpu::AddressMode,
}

impl Default for SurfaceSampling {
    fn default() -> Self {
        Self {
            filter: wgpu::FilterMode::Linear,
            address: wgpu::AddressMode::ClampToEdge,
        }
    }
}
