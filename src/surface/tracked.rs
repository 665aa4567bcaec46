//! Identity-tracked resource wrapper.

use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Wraps a resource with a process-unique id.
///
/// wgpu handles expose no stable public identity, so "did this view change
/// since last frame" becomes a u64 compare through the id. The blitter's
/// bind-group cache and the texture registry both key on it.
#[derive(Debug)]
pub struct Tracked<T> {
    id: u64,
    resource: T,
}

impl<T> Tracked<T> {
    #[must_use]
    pub fn new(resource: T) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            resource,
        }
    }

    /// Process-unique id of this resource. Clones share it.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.resource
    }
}

impl<T: Clone> Clone for Tracked<T> {
    /// Clones keep the id: they refer to the same underlying resource.
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            resource: self.resource.clone(),
        }
    }
}
