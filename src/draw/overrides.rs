//! Material and shader overrides.

use super::{MaterialKey, ShaderKey};

/// Author-time override selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverrideMode {
    /// Draw every object with its own material.
    None,
    /// Replace every object's material.
    #[default]
    Material,
    /// Keep each object's material, substitute the shader.
    Shader,
}

/// Resolved override carried by the draw request.
///
/// Each variant carries only the fields meaningful to it, so "index without
/// a reference" states cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverrideDirective {
    /// No override; objects draw with their own materials.
    #[default]
    None,
    Material {
        material: MaterialKey,
        pass_index: u32,
    },
    Shader {
        shader: ShaderKey,
        pass_index: u32,
    },
}

impl OverrideDirective {
    /// Resolves the authored mode and references into a directive.
    ///
    /// A mode whose reference is missing resolves to [`None`](Self::None):
    /// the draw silently falls back to each object's own material.
    #[must_use]
    pub fn resolve(
        mode: OverrideMode,
        material: Option<MaterialKey>,
        material_pass_index: u32,
        shader: Option<ShaderKey>,
        shader_pass_index: u32,
    ) -> Self {
        match mode {
            OverrideMode::None => Self::None,
            OverrideMode::Material => match material {
                Some(material) => Self::Material {
                    material,
                    pass_index: material_pass_index,
                },
                None => Self::None,
            },
            OverrideMode::Shader => match shader {
                Some(shader) => Self::Shader {
                    shader,
                    pass_index: shader_pass_index,
                },
                None => Self::None,
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
