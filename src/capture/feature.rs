//! Capture feature: authored settings and pass lifecycle.

use crate::draw::{DepthOverride, LayerMask, MaterialKey, OverrideMode, ShaderKey};
use crate::graph::node::PassNode;
use crate::graph::schedule::FrameSchedule;
use crate::graph::stage::PassStage;
use crate::surface::descriptor::SurfaceSampling;

use super::pass::CapturePass;

/// Name a capture publishes under when the author leaves it blank.
pub const DEFAULT_TEXTURE_NAME: &str = "capture_color";

/// Offscreen surface settings.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `texture_name` | `"capture_color"` | Registry name the surface publishes under |
/// | `scale` | `1.0` | Size relative to the camera output |
/// | `format` | `Rgba8UnormSrgb` | Pixel format |
/// | `sampling` | linear, clamp | Filter and address mode of the published sampler |
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSettings {
    pub texture_name: String,
    pub scale: f32,
    pub format: wgpu::TextureFormat,
    pub sampling: SurfaceSampling,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            texture_name: DEFAULT_TEXTURE_NAME.to_string(),
            scale: 1.0,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            sampling: SurfaceSampling::default(),
        }
    }
}

/// Authored configuration of one capture.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `label` | `"Object Capture"` | Debug-group and resource label |
/// | `stage` | `AfterOpaque` | Frame stage the pass runs at |
/// | `layers` | all | Layer mask objects must intersect |
/// | `techniques` | empty (drawn as the built-in set) | Technique allow-list |
/// | `clear_color` | black | Clear value of the capture surface |
/// | `debug` | `false` | Force the last stage and composite onto the camera |
/// | `override_mode` | `Material` | Which override (if any) applies |
///
/// Override references left `None` silently disable the override. The
/// depth and stencil overrides are forwarded to the host's drawer untouched.
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    pub label: String,
    pub stage: PassStage,
    pub layers: LayerMask,
    pub techniques: Vec<String>,
    pub clear_color: wgpu::Color,
    pub debug: bool,
    pub override_mode: OverrideMode,
    pub override_material: Option<MaterialKey>,
    pub override_material_pass: u32,
    pub override_shader: Option<ShaderKey>,
    pub override_shader_pass: u32,
    pub depth_override: Option<DepthOverride>,
    pub stencil_override: Option<wgpu::StencilState>,
    pub surface: SurfaceSettings,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            label: "Object Capture".to_string(),
            stage: PassStage::default(),
            layers: LayerMask::default(),
            techniques: Vec::new(),
            clear_color: wgpu::Color::BLACK,
            debug: false,
            override_mode: OverrideMode::default(),
            override_material: None,
            override_material_pass: 0,
            override_shader: None,
            override_shader_pass: 0,
            depth_override: None,
            stencil_override: None,
            surface: SurfaceSettings::default(),
        }
    }
}

/// Owns a [`CapturePass`] and hands it to the frame schedule.
///
/// The host calls [`create`](Self::create) once (and again after any
/// settings change), [`enqueue`](Self::enqueue) every frame, and
/// [`teardown`](Self::teardown) when the feature is removed.
#[derive(Default)]
pub struct CaptureFeature {
    settings: CaptureSettings,
    pass: Option<CapturePass>,
}

impl CaptureFeature {
    #[must_use]
    pub fn new(settings: CaptureSettings) -> Self {
        Self {
            settings,
            pass: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Mutable settings access. Changes take effect at the next
    /// [`create`](Self::create).
    #[inline]
    pub fn settings_mut(&mut self) -> &mut CaptureSettings {
        &mut self.settings
    }

    /// Builds the pass from the current settings.
    ///
    /// Replaces any existing pass; the old pass's surface is released when
    /// it drops.
    pub fn create(&mut self) {
        self.pass = Some(CapturePass::new(&self.settings));
    }

    /// Stage the pass will actually run at. Debug captures run at the last
    /// pre-composite stage so every earlier pass has contributed.
    #[must_use]
    pub fn effective_stage(&self) -> PassStage {
        if self.settings.debug {
            PassStage::AfterPostProcess
        } else {
            self.settings.stage
        }
    }

    /// Adds the pass to `schedule` for this frame. Does nothing (with a
    /// warning) if [`create`](Self::create) has not run.
    pub fn enqueue<'a>(&'a mut self, schedule: &mut FrameSchedule<'a>) {
        let stage = self.effective_stage();
        let Some(pass) = self.pass.as_mut() else {
            log::warn!(
                "capture feature '{}' enqueued before create; skipping",
                self.settings.label
            );
            return;
        };
        pass.set_stage(stage);
        schedule.add_pass(stage, pass);
    }

    #[inline]
    #[must_use]
    pub fn pass(&self) -> Option<&CapturePass> {
        self.pass.as_ref()
    }

    /// Disposes the pass and its GPU resources.
    pub fn teardown(&mut self) {
        if let Some(pass) = self.pass.as_mut() {
            pass.dispose();
        }
        self.pass = None;
    }
}
