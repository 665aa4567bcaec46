//! Frame timeline stages.
//!
//! A [`PassStage`] names the insertion point at which an extension pass runs
//! relative to the host's own work. Passes queued at the same stage run in
//! insertion order.

/// Insertion points in the host's frame timeline.
///
/// | Stage | Runs |
/// |-------|------|
/// | `FrameStart` | before any scene rendering |
/// | `BeforeOpaque` | before the opaque queue |
/// | `AfterOpaque` | after the opaque queue |
/// | `AfterSkybox` | after the skybox |
/// | `AfterTransparent` | after the transparent queue |
/// | `BeforePostProcess` | before the post-processing chain |
/// | `AfterPostProcess` | after the post-processing chain |
/// | `FrameEnd` | last, before submission |
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PassStage {
    FrameStart = 0,
    BeforeOpaque = 1,
    AfterOpaque = 2,
    AfterSkybox = 3,
    AfterTransparent = 4,
    BeforePostProcess = 5,
    AfterPostProcess = 6,
    FrameEnd = 7,
}

impl PassStage {
    /// Numeric scheduling order.
    #[inline]
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Stage name for logs and debug groups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FrameStart => "FrameStart",
            Self::BeforeOpaque => "BeforeOpaque",
            Self::AfterOpaque => "AfterOpaque",
            Self::AfterSkybox => "AfterSkybox",
            Self::AfterTransparent => "AfterTransparent",
            Self::BeforePostProcess => "BeforePostProcess",
            Self::AfterPostProcess => "AfterPostProcess",
            Self::FrameEnd => "FrameEnd",
        }
    }
}

impl Default for PassStage {
    /// Captures default to running right after the opaque queue.
    fn default() -> Self {
        Self::AfterOpaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ordering() {
        assert!(PassStage::FrameStart.order() < PassStage::BeforeOpaque.order());
        assert!(PassStage::AfterOpaque.order() < PassStage::AfterTransparent.order());
        assert!(PassStage::BeforePostProcess.order() < PassStage::AfterPostProcess.order());
        assert!(PassStage::AfterPostProcess.order() < PassStage::FrameEnd.order());
        assert_eq!(PassStage::FrameEnd.order(), 7);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(PassStage::AfterOpaque.name(), "AfterOpaque");
        assert_eq!(PassStage::default(), PassStage::AfterOpaque);
    }
}
