//! The capture pass.

use crate::draw::{
    DepthOverride, DrawFilter, DrawRequest, OverrideDirective, SortOrder, build_draw_list,
};
use crate::graph::context::{CameraTarget, ConfigureContext, ExecuteContext};
use crate::graph::node::PassNode;
use crate::graph::stage::PassStage;
use crate::interner::{self, Symbol};
use crate::surface::blit::SurfaceBlitter;
use crate::surface::descriptor::{SurfaceDescriptor, SurfaceSampling};
use crate::surface::slot::{SlotOutcome, SurfaceSlot};
use crate::surface::target::CaptureTarget;

use super::feature::{CaptureSettings, DEFAULT_TEXTURE_NAME};

/// Draws the filtered objects into an offscreen surface and publishes the
/// result under the configured name.
///
/// Configure sizes the surface against the camera, reallocating only when
/// the derived description changes, and publishes the sampled view. Execute
/// clears the surface, records the filtered draws through the host's
/// drawer, and in debug mode composites the surface onto the camera output.
pub struct CapturePass {
    label: String,
    stage: PassStage,
    clear_color: wgpu::Color,
    debug: bool,
    filter: DrawFilter,
    directive: OverrideDirective,
    depth_override: Option<DepthOverride>,
    stencil_override: Option<wgpu::StencilState>,
    texture_name: Symbol,
    scale: f32,
    format: wgpu::TextureFormat,
    sampling: SurfaceSampling,
    slot: SurfaceSlot<CaptureTarget>,
    blitter: Option<SurfaceBlitter>,
}

impl CapturePass {
    /// Builds the pass from authored settings, normalizing the surface name
    /// and scale. No GPU work happens here; the surface is allocated at the
    /// first configure.
    #[must_use]
    pub fn new(settings: &CaptureSettings) -> Self {
        let name = settings.surface.texture_name.trim();
        let texture_name = if name.is_empty() {
            interner::intern(DEFAULT_TEXTURE_NAME)
        } else {
            interner::intern(name)
        };

        let scale = settings.surface.scale;
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            log::warn!(
                "capture '{}': surface scale {scale} is not positive, using 1.0",
                settings.label
            );
            1.0
        };

        Self {
            label: settings.label.clone(),
            stage: settings.stage,
            clear_color: settings.clear_color,
            debug: settings.debug,
            filter: DrawFilter::new(settings.layers, &settings.techniques),
            directive: OverrideDirective::resolve(
                settings.override_mode,
                settings.override_material,
                settings.override_material_pass,
                settings.override_shader,
                settings.override_shader_pass,
            ),
            depth_override: settings.depth_override,
            stencil_override: settings.stencil_override.clone(),
            texture_name,
            scale,
            format: settings.surface.format,
            sampling: settings.surface.sampling,
            slot: SurfaceSlot::new(),
            blitter: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn stage(&self) -> PassStage {
        self.stage
    }

    pub(crate) fn set_stage(&mut self, stage: PassStage) {
        self.stage = stage;
    }

    /// Interned name the surface publishes under.
    #[inline]
    #[must_use]
    pub const fn texture_name(&self) -> Symbol {
        self.texture_name
    }

    #[inline]
    #[must_use]
    pub const fn directive(&self) -> OverrideDirective {
        self.directive
    }

    #[inline]
    #[must_use]
    pub const fn filter(&self) -> &DrawFilter {
        &self.filter
    }

    #[inline]
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.slot.is_allocated()
    }

    /// Description of the currently held surface, if any.
    #[must_use]
    pub fn surface_descriptor(&self) -> Option<SurfaceDescriptor> {
        self.slot.descriptor()
    }

    /// Description the surface would take for `camera`.
    #[must_use]
    pub fn descriptor_for(&self, camera: &CameraTarget) -> SurfaceDescriptor {
        SurfaceDescriptor::for_camera(camera, self.scale, self.format)
    }

    fn draw_request(&self, order: SortOrder) -> DrawRequest<'_> {
        DrawRequest {
            filter: &self.filter,
            order,
            directive: self.directive,
            depth_override: self.depth_override,
            stencil_override: self.stencil_override.clone(),
        }
    }
}

impl PassNode for CapturePass {
    fn name(&self) -> &str {
        &self.label
    }

    fn configure(&mut self, ctx: &mut ConfigureContext<'_>) {
        let desc = self.descriptor_for(ctx.camera);
        let name = interner::resolve(self.texture_name);
        let sampling = self.sampling;
        let device = ctx.device;

        let outcome = self
            .slot
            .ensure_with(desc, |d| CaptureTarget::allocate(device, d, sampling, name));
        if outcome != SlotOutcome::Reused {
            log::debug!(
                "capture '{}': {}x{} {:?} target ({outcome:?})",
                self.label,
                desc.width,
                desc.height,
                desc.format
            );
        }

        let Some(target) = self.slot.get() else {
            return;
        };
        ctx.registry
            .publish(self.texture_name, target.sampled.clone(), desc);

        if self.debug {
            let blitter = self
                .blitter
                .get_or_insert_with(|| SurfaceBlitter::new(device));
            blitter.prepare(device, ctx.camera.format, &target.sampled, &target.sampler);
        }
    }

    fn execute(&self, ctx: &mut ExecuteContext<'_>, encoder: &mut wgpu::CommandEncoder) {
        let Some(target) = self.slot.get() else {
            log::warn!("capture '{}' executed before configure; skipping", self.label);
            return;
        };

        let request = self.draw_request(ctx.camera.opaque_order);
        let commands = build_draw_list(ctx.cull, &request);

        {
            // The pass begins even with nothing to draw so the clear lands.
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some(&self.label),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target.attachment,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !commands.is_empty() {
                ctx.drawer.draw_objects(&mut rpass, &request, &commands);
            }
        }

        if self.debug && let Some(blitter) = &self.blitter {
            blitter.blit(encoder, ctx.camera.output, ctx.camera.output_format);
        }
    }

    fn dispose(&mut self) {
        if self.slot.release() {
            log::debug!("capture '{}': released target", self.label);
        }
        self.blitter = None;
    }
}
