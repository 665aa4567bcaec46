//! Offscreen surface management.
//!
//! A capture surface is described by a [`SurfaceDescriptor`], held in a
//! [`SurfaceSlot`] that reallocates only when the description changes, and
//! published under an interned name through the [`TextureRegistry`] so that
//! later passes can sample it.

pub mod blit;
pub mod descriptor;
pub mod registry;
pub mod slot;
pub mod target;
pub mod tracked;

pub use blit::SurfaceBlitter;
pub use descriptor::{MAX_SURFACE_MIPS, SurfaceDescriptor, SurfaceSampling, mip_count_for, scaled_extent};
pub use registry::{PublishedTexture, TextureRegistry};
pub use slot::{SlotOutcome, SurfaceSlot};
pub use target::CaptureTarget;
pub use tracked::Tracked;
