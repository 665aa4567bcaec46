//! Host extension point: stages, the pass trait, contexts, and the schedule.

pub mod context;
pub mod node;
pub mod schedule;
pub mod stage;

pub use context::{CameraData, CameraTarget, ConfigureContext, ExecuteContext};
pub use node::PassNode;
pub use schedule::FrameSchedule;
pub use stage::PassStage;
