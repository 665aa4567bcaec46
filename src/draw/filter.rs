//! Layer and technique filtering.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::interner::{self, Symbol};

use super::list::VisibleObject;

bitflags! {
    /// 32-bit object layer mask.
    ///
    /// Layers are anonymous bit positions assigned by the host; only layer 0
    /// carries a conventional name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        /// Layer 0, the host's default object layer.
        const DEFAULT = 1;
        // Every bit is a valid layer.
        const _ = !0;
    }
}

impl LayerMask {
    /// Mask with only `index` set. Indices past 31 yield an empty mask.
    #[must_use]
    pub fn layer(index: u32) -> Self {
        Self::from_bits_truncate(1u32.checked_shl(index).unwrap_or(0))
    }
}

impl Default for LayerMask {
    /// All layers.
    fn default() -> Self {
        Self::all()
    }
}

/// Interned shader-technique tag.
///
/// Materials advertise the technique they render with; a capture draws only
/// objects whose technique is in its allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Technique(Symbol);

impl Technique {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(interner::intern(name))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        interner::resolve(self.0)
    }

    /// The interned symbol behind this tag.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        self.0
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Techniques a capture draws when the author lists none.
pub const DEFAULT_TECHNIQUES: [&str; 3] = ["unlit", "forward", "forward_only"];

/// Object selection for one capture: layer mask plus technique allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawFilter {
    pub layers: LayerMask,
    pub techniques: SmallVec<[Technique; 4]>,
}

impl DrawFilter {
    /// Builds a filter. An empty `technique_names` resolves to
    /// [`DEFAULT_TECHNIQUES`].
    #[must_use]
    pub fn new<S: AsRef<str>>(layers: LayerMask, technique_names: &[S]) -> Self {
        let techniques = if technique_names.is_empty() {
            DEFAULT_TECHNIQUES.iter().map(|n| Technique::new(n)).collect()
        } else {
            technique_names
                .iter()
                .map(|n| Technique::new(n.as_ref()))
                .collect()
        };
        Self { layers, techniques }
    }

    /// Whether `object` passes both the layer and the technique test.
    #[must_use]
    pub fn matches(&self, object: &VisibleObject) -> bool {
        self.layers.intersects(object.layers) && self.techniques.contains(&object.technique)
    }
}

impl Default for DrawFilter {
    fn default() -> Self {
        Self::new::<&str>(LayerMask::default(), &[])
    }
}
