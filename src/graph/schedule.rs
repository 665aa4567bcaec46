//! Per-frame pass schedule.

use smallvec::SmallVec;

use crate::graph::context::{ConfigureContext, ExecuteContext};
use crate::graph::node::PassNode;
use crate::graph::stage::PassStage;

struct Entry<'a> {
    stage: PassStage,
    order: u16,
    node: &'a mut dyn PassNode,
}

/// Passes queued for one frame, ordered by (stage, insertion).
///
/// Features re-enqueue their passes every frame; the schedule borrows them
/// for the duration of the frame and never takes ownership. Drive order:
/// [`configure_all`](Self::configure_all), then
/// [`execute_all`](Self::execute_all).
#[derive(Default)]
pub struct FrameSchedule<'a> {
    entries: SmallVec<[Entry<'a>; 8]>,
    next_order: u16,
}

impl<'a> FrameSchedule<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a pass at the given stage. Passes at the same stage run in
    /// insertion order.
    pub fn add_pass(&mut self, stage: PassStage, node: &'a mut dyn PassNode) -> &mut Self {
        let order = self.next_order;
        self.next_order += 1;
        self.entries.push(Entry { stage, order, node });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any pass is queued at `stage`.
    #[must_use]
    pub fn has_stage(&self, stage: PassStage) -> bool {
        self.entries.iter().any(|e| e.stage == stage)
    }

    /// Drops all queued passes, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_order = 0;
    }

    fn sort_entries(&mut self) {
        self.entries.sort_unstable_by_key(|e| (e.stage.order(), e.order));
    }

    /// The (stage, name) sequence in execution order.
    pub fn execution_order(&mut self) -> impl Iterator<Item = (PassStage, &str)> + '_ {
        self.sort_entries();
        self.entries.iter().map(|e| (e.stage, e.node.name()))
    }

    /// Runs the configure phase for every queued pass in execution order.
    pub fn configure_all(&mut self, ctx: &mut ConfigureContext<'_>) {
        self.sort_entries();
        for entry in &mut self.entries {
            entry.node.configure(ctx);
        }
    }

    /// Runs the execute phase in execution order, wrapping each pass in a
    /// named debug group.
    pub fn execute_all(&mut self, ctx: &mut ExecuteContext<'_>, encoder: &mut wgpu::CommandEncoder) {
        self.sort_entries();
        for entry in &mut self.entries {
            encoder.push_debug_group(entry.node.name());
            entry.node.execute(ctx, encoder);
            encoder.pop_debug_group();
        }
    }
}
