//! Headless Capture Example
//!
//! Runs the capture pass for two frames against a synthetic scene, without a
//! window: a fake camera target stands in for the swapchain and a counting
//! drawer stands in for the host's draw submission. The second frame shows
//! the surface being reused instead of reallocated.
//!
//! Run with `RUST_LOG=debug cargo run --example headless_capture` to see the
//! allocation and publish logs.

use anyhow::Context as _;
use slotmap::SlotMap;

use obscura::capture::{CaptureFeature, CaptureSettings, SurfaceSettings};
use obscura::draw::{
    CullResults, DrawCommand, DrawKey, DrawRequest, LayerMask, MaterialKey, ObjectDrawer,
    ObjectKey, SortOrder, Technique, VisibleObject,
};
use obscura::graph::{CameraData, CameraTarget, ConfigureContext, ExecuteContext, FrameSchedule};
use obscura::interner;
use obscura::surface::TextureRegistry;

/// Stands in for the host's draw submission; a real host would bind
/// pipelines and record one draw per command here.
#[derive(Default)]
struct CountingDrawer {
    drawn: usize,
}

impl ObjectDrawer for CountingDrawer {
    fn draw_objects(
        &mut self,
        _rpass: &mut wgpu::RenderPass<'_>,
        _request: &DrawRequest<'_>,
        commands: &[DrawCommand],
    ) {
        self.drawn += commands.len();
    }
}

/// Five visible objects: three glowing ones on layer 1, a stone on layer 0,
/// and a shadow proxy the technique filter drops.
fn synthetic_scene() -> CullResults {
    let mut objects: SlotMap<ObjectKey, ()> = SlotMap::with_key();
    let mut materials: SlotMap<MaterialKey, ()> = SlotMap::with_key();
    let glow = materials.insert(());
    let stone = materials.insert(());

    let mut cull = CullResults::new();
    for depth in [2.5, 4.0, 1.0] {
        cull.objects.push(VisibleObject {
            object: objects.insert(()),
            layers: LayerMask::layer(1),
            technique: Technique::new("forward"),
            material: glow,
            sort_key: DrawKey::new(0, 0, depth),
        });
    }
    cull.objects.push(VisibleObject {
        object: objects.insert(()),
        layers: LayerMask::DEFAULT,
        technique: Technique::new("forward"),
        material: stone,
        sort_key: DrawKey::new(0, 1, 3.0),
    });
    cull.objects.push(VisibleObject {
        object: objects.insert(()),
        layers: LayerMask::layer(1),
        technique: Technique::new("shadow_caster"),
        material: stone,
        sort_key: DrawKey::new(1, 1, 3.0),
    });
    cull
}

async fn run() -> anyhow::Result<()> {
    let instance = wgpu::Instance::default();
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .context("No suitable GPU adapter")?;

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: None,
            memory_hints: wgpu::MemoryHints::Performance,
            ..Default::default()
        })
        .await?;

    // Offscreen stand-in for the camera's swapchain image.
    let camera = CameraTarget {
        width: 1280,
        height: 720,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
    };
    let camera_texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Camera Output"),
        size: wgpu::Extent3d {
            width: camera.width,
            height: camera.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: camera.format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let camera_view = camera_texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mut feature = CaptureFeature::new(CaptureSettings {
        label: "Glow Capture".to_string(),
        layers: LayerMask::layer(1),
        clear_color: wgpu::Color::TRANSPARENT,
        debug: true,
        surface: SurfaceSettings {
            texture_name: "glow_color".to_string(),
            scale: 0.5,
            ..SurfaceSettings::default()
        },
        ..CaptureSettings::default()
    });
    feature.create();
    println!("capture runs at stage {:?}", feature.effective_stage());

    let cull = synthetic_scene();
    let mut registry = TextureRegistry::new();
    let mut drawer = CountingDrawer::default();

    for frame in 0..2u32 {
        registry.begin_frame();
        let mut schedule = FrameSchedule::new();
        feature.enqueue(&mut schedule);

        {
            let mut configure = ConfigureContext {
                device: &device,
                camera: &camera,
                registry: &mut registry,
            };
            schedule.configure_all(&mut configure);
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Frame Encoder"),
        });
        {
            let mut execute = ExecuteContext {
                device: &device,
                cull: &cull,
                camera: CameraData {
                    output: &camera_view,
                    output_format: camera.format,
                    opaque_order: SortOrder::FrontToBack,
                },
                registry: &registry,
                drawer: &mut drawer,
            };
            schedule.execute_all(&mut execute, &mut encoder);
        }

        queue.submit(std::iter::once(encoder.finish()));
        println!("frame {frame} submitted");
    }

    let name = interner::get("glow_color").context("capture never published")?;
    let published = registry.get(name).context("registry entry missing")?;
    println!(
        "published 'glow_color': {}x{} {:?}, frame {}",
        published.width,
        published.height,
        published.format,
        published.frame()
    );
    println!("drawer recorded {} draws over 2 frames", drawer.drawn);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    pollster::block_on(run())
}
