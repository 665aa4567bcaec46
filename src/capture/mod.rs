//! Object capture: render a filtered set of objects into a named offscreen
//! surface.
//!
//! [`CaptureFeature`] holds the authored [`CaptureSettings`] and owns the
//! [`CapturePass`] it enqueues into the frame schedule each frame.

pub mod feature;
pub mod pass;

pub use feature::{CaptureFeature, CaptureSettings, DEFAULT_TEXTURE_NAME, SurfaceSettings};
pub use pass::CapturePass;
