//! Published-texture registry.

use rustc_hash::FxHashMap;

use crate::interner::{self, Symbol};

use super::descriptor::SurfaceDescriptor;
use super::tracked::Tracked;

/// A texture made visible to the rest of the frame under a global name.
#[derive(Debug, Clone)]
pub struct PublishedTexture<V = wgpu::TextureView> {
    pub view: Tracked<V>,
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    frame: u64,
}

impl<V> PublishedTexture<V> {
    /// Frame index at which this entry was (re)published.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}

/// Name → texture registry with publish-once/consume-many frame semantics.
///
/// Producers publish during their configure phase; any later pass resolves
/// the name during the same frame. A second publish of one name within a
/// frame replaces the entry and logs a warning (last writer wins).
///
/// The view type is generic so the registry logic stays testable without a
/// GPU device; hosts use the default `wgpu::TextureView`.
#[derive(Debug)]
pub struct TextureRegistry<V = wgpu::TextureView> {
    entries: FxHashMap<Symbol, PublishedTexture<V>>,
    frame: u64,
}

impl<V> Default for TextureRegistry<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            frame: 0,
        }
    }
}

impl<V> TextureRegistry<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the frame counter. Hosts call this once per frame, before
    /// any configure runs.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    /// Current frame index.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Publishes `view` under `name` for the current frame.
    pub fn publish(&mut self, name: Symbol, view: Tracked<V>, desc: SurfaceDescriptor) {
        if let Some(existing) = self.entries.get(&name)
            && existing.frame == self.frame
            && existing.view.id() != view.id()
        {
            log::warn!(
                "texture '{}' published twice in frame {}; keeping the newer resource",
                interner::resolve(name),
                self.frame
            );
        }
        self.entries.insert(
            name,
            PublishedTexture {
                view,
                width: desc.width,
                height: desc.height,
                format: desc.format,
                frame: self.frame,
            },
        );
    }

    /// Resolves a published name.
    #[must_use]
    pub fn get(&self, name: Symbol) -> Option<&PublishedTexture<V>> {
        self.entries.get(&name)
    }

    /// Resolves a name only if it was published during the current frame.
    #[must_use]
    pub fn get_current(&self, name: Symbol) -> Option<&PublishedTexture<V>> {
        self.entries.get(&name).filter(|e| e.frame == self.frame)
    }

    #[must_use]
    pub fn contains(&self, name: Symbol) -> bool {
        self.entries.contains_key(&name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets all publications.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
