//! Allocated capture surface.

use super::descriptor::{SurfaceDescriptor, SurfaceSampling};
use super::tracked::Tracked;

/// GPU resources of one capture surface.
///
/// Two views exist over the texture: `attachment` covers only the base mip
/// (render attachments must be single-mip) and `sampled` covers the full
/// chain for publication and the debug composite.
#[derive(Debug)]
pub struct CaptureTarget {
    pub texture: wgpu::Texture,
    pub attachment: wgpu::TextureView,
    pub sampled: Tracked<wgpu::TextureView>,
    pub sampler: wgpu::Sampler,
}

impl CaptureTarget {
    /// Creates the texture, both views, and the sampler.
    #[must_use]
    pub fn allocate(
        device: &wgpu::Device,
        desc: SurfaceDescriptor,
        sampling: SurfaceSampling,
        label: &str,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: desc.extent(),
            mip_level_count: desc.mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: desc.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let attachment = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(label),
            base_mip_level: 0,
            mip_level_count: Some(1),
            ..Default::default()
        });

        let sampled = Tracked::new(texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(label),
            ..Default::default()
        }));

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            mag_filter: sampling.filter,
            min_filter: sampling.filter,
            // Content lives in mip 0 only; no filtering across the chain.
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            address_mode_u: sampling.address,
            address_mode_v: sampling.address,
            ..Default::default()
        });

        Self {
            texture,
            attachment,
            sampled,
            sampler,
        }
    }
}
