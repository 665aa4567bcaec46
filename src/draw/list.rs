//! Draw-list construction.

use super::filter::{DrawFilter, LayerMask, Technique};
use super::overrides::OverrideDirective;
use super::{MaterialKey, ObjectKey, ShaderKey};

/// Packed 64-bit sort key.
///
/// Layout, most significant first:
///
/// | Bits | Field |
/// |------|-------|
/// | 63..48 | batch (pipeline/state group) |
/// | 47..32 | material |
/// | 31..0 | depth (f32 bits, non-negative) |
///
/// Ascending order is front-to-back within a material within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DrawKey(u64);

impl DrawKey {
    /// Packs a key. Negative or NaN depths clamp to zero; non-negative f32
    /// bit patterns order the same as their values.
    #[must_use]
    pub fn new(batch: u16, material: u16, depth: f32) -> Self {
        let depth_bits = if depth.is_sign_negative() || depth.is_nan() {
            0
        } else {
            depth.to_bits()
        };
        Self((u64::from(batch) << 48) | (u64::from(material) << 32) | u64::from(depth_bits))
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Sort direction over [`DrawKey`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending keys. The usual opaque order.
    #[default]
    FrontToBack,
    /// Descending keys.
    BackToFront,
}

/// One object in the host's visibility set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleObject {
    pub object: ObjectKey,
    pub layers: LayerMask,
    /// Technique tag of the object's material.
    pub technique: Technique,
    pub material: MaterialKey,
    /// Host-assigned sort key in the camera's opaque convention.
    pub sort_key: DrawKey,
}

/// Host-computed visibility set for one camera.
#[derive(Debug, Default)]
pub struct CullResults {
    pub objects: Vec<VisibleObject>,
}

impl CullResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Depth-state override forwarded to the host's drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthOverride {
    pub compare: wgpu::CompareFunction,
    pub write_enabled: bool,
}

/// Per-frame draw parameters. Built during execute, never persisted.
pub struct DrawRequest<'a> {
    pub filter: &'a DrawFilter,
    pub order: SortOrder,
    pub directive: OverrideDirective,
    /// Forwarded untouched; the capture pass has no depth attachment.
    pub depth_override: Option<DepthOverride>,
    /// Forwarded untouched.
    pub stencil_override: Option<wgpu::StencilState>,
}

/// One ordered draw for the host to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub object: ObjectKey,
    /// Effective material: the object's own, or the override.
    pub material: MaterialKey,
    /// Shader substitution, set only by a shader override.
    pub shader: Option<ShaderKey>,
    /// Material pass to draw with.
    pub pass_index: u32,
    pub sort_key: DrawKey,
}

/// Records GPU commands for an ordered slice of draw commands.
///
/// Implemented by the host. The capture pass owns the render pass and its
/// target; the drawer owns pipelines and bind groups.
pub trait ObjectDrawer {
    fn draw_objects(
        &mut self,
        rpass: &mut wgpu::RenderPass<'_>,
        request: &DrawRequest<'_>,
        commands: &[DrawCommand],
    );
}

/// Builds the filtered, override-applied, sorted draw list.
///
/// Every command records pass index 0; the index configured on the directive
/// is carried but not consumed here. Empty cull results produce an empty
/// list.
#[must_use]
pub fn build_draw_list(cull: &CullResults, request: &DrawRequest<'_>) -> Vec<DrawCommand> {
    let mut commands: Vec<DrawCommand> = cull
        .objects
        .iter()
        .filter(|object| request.filter.matches(object))
        .map(|object| {
            let (material, shader) = match request.directive {
                OverrideDirective::None => (object.material, None),
                OverrideDirective::Material { material, .. } => (material, None),
                OverrideDirective::Shader { shader, .. } => (object.material, Some(shader)),
            };
            DrawCommand {
                object: object.object,
                material,
                shader,
                pass_index: 0,
                sort_key: object.sort_key,
            }
        })
        .collect();

    match request.order {
        SortOrder::FrontToBack => commands.sort_unstable_by_key(|c| c.sort_key),
        SortOrder::BackToFront => {
            commands.sort_unstable_by_key(|c| std::cmp::Reverse(c.sort_key));
        }
    }
    commands
}
