//! Extension pass trait.

use crate::graph::context::{ConfigureContext, ExecuteContext};

/// A pass the host schedules into its frame.
///
/// The host drives two phases per frame, strictly in order:
/// [`configure`](Self::configure) allocates or rebinds resources and
/// publishes outputs, then [`execute`](Self::execute) records commands into
/// the frame encoder. [`dispose`](Self::dispose) runs outside any frame and
/// releases owned GPU resources.
///
/// `configure` is the only per-frame phase with mutable access to the pass;
/// `execute` records from shared state.
pub trait PassNode {
    /// Pass name, used for profiling spans and GPU debug groups.
    fn name(&self) -> &str {
        "unnamed"
    }

    /// Per-frame resource phase. Runs before any `execute` of the frame.
    fn configure(&mut self, _ctx: &mut ConfigureContext<'_>) {}

    /// Per-frame recording phase. All commands go through the frame encoder,
    /// so the pass's work lands in the frame's single submission.
    fn execute(&self, ctx: &mut ExecuteContext<'_>, encoder: &mut wgpu::CommandEncoder);

    /// Releases owned GPU resources. Must be idempotent.
    fn dispose(&mut self) {}
}
