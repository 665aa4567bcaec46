//! Offscreen Surface Tests
//!
//! Tests for:
//! - scaled_extent / mip_count_for: camera-relative sizing rules
//! - SurfaceDescriptor: reallocation key derived from a camera target
//! - SurfaceSlot: allocate once, reallocate on change, release semantics
//! - TextureRegistry: named publish/consume with frame tracking

use std::cell::Cell;
use std::rc::Rc;

use obscura::graph::CameraTarget;
use obscura::interner;
use obscura::surface::{
    MAX_SURFACE_MIPS, SlotOutcome, SurfaceDescriptor, SurfaceSlot, TextureRegistry, Tracked,
    mip_count_for, scaled_extent,
};

fn desc(width: u32, height: u32) -> SurfaceDescriptor {
    SurfaceDescriptor {
        width,
        height,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        mip_level_count: mip_count_for(width, height),
    }
}

// ============================================================================
// Sizing Tests
// ============================================================================

#[test]
fn half_scale_produces_half_resolution() {
    assert_eq!(scaled_extent(1920, 1080, 0.5), (960, 540));
}

#[test]
fn identity_scale_keeps_camera_extent() {
    assert_eq!(scaled_extent(1280, 720, 1.0), (1280, 720));
}

#[test]
fn scale_above_one_grows_surface() {
    assert_eq!(scaled_extent(640, 360, 2.0), (1280, 720));
}

#[test]
fn scale_rounds_to_nearest_pixel() {
    assert_eq!(scaled_extent(1279, 719, 0.5), (640, 360));
    assert_eq!(scaled_extent(1281, 721, 0.5), (641, 361));
}

#[test]
fn tiny_scale_clamps_to_one_pixel() {
    assert_eq!(scaled_extent(100, 100, 0.001), (1, 1));
    assert_eq!(scaled_extent(1, 1, 0.25), (1, 1));
}

#[test]
fn mip_count_caps_at_limit() {
    assert_eq!(mip_count_for(960, 540), MAX_SURFACE_MIPS);
    assert_eq!(mip_count_for(4096, 4096), MAX_SURFACE_MIPS);
}

#[test]
fn mip_count_shrinks_for_tiny_surfaces() {
    assert_eq!(mip_count_for(1, 1), 1);
    assert_eq!(mip_count_for(2, 2), 2);
    assert_eq!(mip_count_for(4, 4), 3);
    // The longest axis drives the chain length.
    assert_eq!(mip_count_for(8, 4), 4);
}

#[test]
fn descriptor_for_camera_combines_scale_and_format() {
    let camera = CameraTarget {
        width: 1920,
        height: 1080,
        format: wgpu::TextureFormat::Bgra8UnormSrgb,
    };
    let desc = SurfaceDescriptor::for_camera(&camera, 0.5, wgpu::TextureFormat::Rgba8UnormSrgb);

    assert_eq!(desc.width, 960);
    assert_eq!(desc.height, 540);
    assert_eq!(
        desc.format,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        "Surface format is configured, not inherited from the camera"
    );
    assert_eq!(desc.mip_level_count, MAX_SURFACE_MIPS);
}

#[test]
fn one_pixel_camera_gets_single_mip() {
    let camera = CameraTarget {
        width: 1,
        height: 1,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
    };
    let desc = SurfaceDescriptor::for_camera(&camera, 1.0, wgpu::TextureFormat::Rgba8UnormSrgb);

    assert_eq!((desc.width, desc.height), (1, 1));
    assert_eq!(desc.mip_level_count, 1);
}

// ============================================================================
// SurfaceSlot Tests
// ============================================================================

/// Counts its own drops through a shared cell.
struct DropProbe(Rc<Cell<u32>>);

impl Drop for DropProbe {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn slot_allocates_once_for_stable_descriptor() {
    let mut slot = SurfaceSlot::new();
    let mut builds = 0;

    let first = slot.ensure_with(desc(128, 128), |_| {
        builds += 1;
    });
    assert_eq!(first, SlotOutcome::Allocated);

    for _ in 0..3 {
        let outcome = slot.ensure_with(desc(128, 128), |_| {
            builds += 1;
        });
        assert_eq!(outcome, SlotOutcome::Reused);
    }
    assert_eq!(builds, 1, "Stable descriptor should never rebuild");
}

#[test]
fn slot_reallocates_when_extent_changes() {
    let drops = Rc::new(Cell::new(0));
    let mut slot = SurfaceSlot::new();

    slot.ensure_with(desc(1280, 720), |_| DropProbe(Rc::clone(&drops)));
    let outcome = slot.ensure_with(desc(1920, 1080), |_| DropProbe(Rc::clone(&drops)));

    assert_eq!(outcome, SlotOutcome::Reallocated);
    assert_eq!(drops.get(), 1, "Old surface should be released exactly once");
    assert_eq!(slot.descriptor(), Some(desc(1920, 1080)));
}

#[test]
fn slot_reallocates_when_format_changes() {
    let mut slot = SurfaceSlot::new();
    let mut a = desc(256, 256);
    slot.ensure_with(a, |_| ());

    a.format = wgpu::TextureFormat::Rgba16Float;
    assert_eq!(slot.ensure_with(a, |_| ()), SlotOutcome::Reallocated);
}

#[test]
fn slot_releases_old_resource_before_building_new() {
    let drops = Rc::new(Cell::new(0));
    let drops_seen_in_create = Rc::new(Cell::new(u32::MAX));
    let mut slot = SurfaceSlot::new();

    slot.ensure_with(desc(64, 64), |_| DropProbe(Rc::clone(&drops)));
    slot.ensure_with(desc(32, 32), |_| {
        drops_seen_in_create.set(drops.get());
        DropProbe(Rc::clone(&drops))
    });

    assert_eq!(
        drops_seen_in_create.get(),
        1,
        "Old surface should be gone before the new one is built"
    );
}

#[test]
fn slot_release_is_idempotent() {
    let mut slot = SurfaceSlot::new();
    assert!(!slot.release(), "Empty slot has nothing to release");

    slot.ensure_with(desc(64, 64), |_| ());
    assert!(slot.release());
    assert!(!slot.release());
    assert!(slot.get().is_none());
    assert!(!slot.is_allocated());
}

#[test]
fn slot_follows_camera_resize() {
    let mut slot = SurfaceSlot::new();
    let mut builds = 0;

    // Two frames at 720p, a resize, then two frames at 1080p.
    let frames = [(1280, 720), (1280, 720), (1920, 1080), (1920, 1080)];
    let mut outcomes = Vec::new();
    for (w, h) in frames {
        outcomes.push(slot.ensure_with(desc(w, h), |_| {
            builds += 1;
        }));
    }

    assert_eq!(
        outcomes,
        [
            SlotOutcome::Allocated,
            SlotOutcome::Reused,
            SlotOutcome::Reallocated,
            SlotOutcome::Reused,
        ]
    );
    assert_eq!(builds, 2);
}

// ============================================================================
// TextureRegistry Tests
// ============================================================================

#[test]
fn registry_resolves_published_name() {
    let mut registry: TextureRegistry<u32> = TextureRegistry::new();
    registry.begin_frame();

    let name = interner::intern("scene_color_copy");
    registry.publish(name, Tracked::new(7), desc(960, 540));

    let entry = registry.get(name).expect("Published name should resolve");
    assert_eq!(*entry.view, 7u32);
    assert_eq!((entry.width, entry.height), (960, 540));
    assert_eq!(entry.format, wgpu::TextureFormat::Rgba8UnormSrgb);
    assert!(registry.get(interner::intern("never_published")).is_none());
}

#[test]
fn registry_replaces_entry_published_twice_in_one_frame() {
    let mut registry: TextureRegistry<u32> = TextureRegistry::new();
    registry.begin_frame();

    let name = interner::intern("contested_name");
    registry.publish(name, Tracked::new(1), desc(64, 64));
    registry.publish(name, Tracked::new(2), desc(128, 128));

    let entry = registry.get(name).expect("Name should still resolve");
    assert_eq!(*entry.view, 2u32, "Last writer should win");
    assert_eq!(entry.width, 128);
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_tracks_publication_frame() {
    let mut registry: TextureRegistry<u32> = TextureRegistry::new();
    let name = interner::intern("frame_tracked");

    registry.begin_frame();
    registry.publish(name, Tracked::new(1), desc(64, 64));
    assert!(registry.get_current(name).is_some());

    registry.begin_frame();
    assert!(
        registry.get_current(name).is_none(),
        "Entry from the previous frame is stale"
    );
    assert!(
        registry.get(name).is_some(),
        "Plain lookup still sees the stale entry"
    );

    registry.publish(name, Tracked::new(2), desc(64, 64));
    let entry = registry.get_current(name).expect("Republished this frame");
    assert_eq!(entry.frame(), registry.frame());
}

#[test]
fn registry_clear_forgets_everything() {
    let mut registry: TextureRegistry<u32> = TextureRegistry::new();
    registry.begin_frame();
    registry.publish(interner::intern("a"), Tracked::new(1), desc(8, 8));
    registry.publish(interner::intern("b"), Tracked::new(2), desc(8, 8));
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
    assert!(!registry.contains(interner::intern("a")));
}
