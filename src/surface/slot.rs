//! Lazily (re)allocated resource slot.

use super::descriptor::SurfaceDescriptor;

/// What [`SurfaceSlot::ensure_with`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// Existing allocation matched the descriptor.
    Reused,
    /// First allocation.
    Allocated,
    /// Descriptor changed; old resource released, new one created.
    Reallocated,
}

/// Owns at most one resource together with the descriptor it was built from.
///
/// The slot is the whole reallocation policy: callers request a descriptor
/// every frame and the resource is rebuilt only when the descriptor changed.
/// The old resource is dropped before the builder runs.
#[derive(Debug, Default)]
pub struct SurfaceSlot<T> {
    current: Option<(SurfaceDescriptor, T)>,
}

impl<T> SurfaceSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Makes the slot hold a resource matching `desc`, building one with
    /// `create` when needed.
    pub fn ensure_with(
        &mut self,
        desc: SurfaceDescriptor,
        create: impl FnOnce(SurfaceDescriptor) -> T,
    ) -> SlotOutcome {
        match &self.current {
            Some((held, _)) if *held == desc => SlotOutcome::Reused,
            Some(_) => {
                // Release before rebuild; at most one allocation lives here.
                self.current = None;
                self.current = Some((desc, create(desc)));
                SlotOutcome::Reallocated
            }
            None => {
                self.current = Some((desc, create(desc)));
                SlotOutcome::Allocated
            }
        }
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, resource)| resource)
    }

    /// Descriptor of the current allocation, if any.
    #[must_use]
    pub fn descriptor(&self) -> Option<SurfaceDescriptor> {
        self.current.as_ref().map(|(desc, _)| *desc)
    }

    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.current.is_some()
    }

    /// Drops the held resource. Returns whether anything was released;
    /// repeated calls are no-ops.
    pub fn release(&mut self) -> bool {
        self.current.take().is_some()
    }
}
