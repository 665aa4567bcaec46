use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use slotmap::SlotMap;

use obscura::draw::{
    CullResults, DrawFilter, DrawKey, DrawRequest, LayerMask, MaterialKey, ObjectKey,
    OverrideDirective, SortOrder, Technique, VisibleObject, build_draw_list,
};

fn synthetic_cull(count: usize) -> CullResults {
    let mut objects: SlotMap<ObjectKey, ()> = SlotMap::with_key();
    let mut materials: SlotMap<MaterialKey, ()> = SlotMap::with_key();
    let material_pool: Vec<MaterialKey> = (0..64).map(|_| materials.insert(())).collect();
    let techniques = ["forward", "unlit", "shadow_caster", "outline"];

    let mut cull = CullResults::new();
    for i in 0..count {
        cull.objects.push(VisibleObject {
            object: objects.insert(()),
            layers: LayerMask::layer((i % 32) as u32),
            technique: Technique::new(techniques[i % techniques.len()]),
            material: material_pool[i % material_pool.len()],
            sort_key: DrawKey::new((i % 7) as u16, (i % 64) as u16, (i * 37 % 1000) as f32),
        });
    }
    cull
}

fn request<'a>(filter: &'a DrawFilter, directive: OverrideDirective) -> DrawRequest<'a> {
    DrawRequest {
        filter,
        order: SortOrder::FrontToBack,
        directive,
        depth_override: None,
        stencil_override: None,
    }
}

fn draw_list_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_draw_list");

    for count in [100, 1_000, 10_000] {
        let cull = synthetic_cull(count);
        let filter = DrawFilter::new(LayerMask::all(), &["forward", "unlit"]);
        let req = request(&filter, OverrideDirective::None);

        group.bench_function(format!("{count}_objects"), |b| {
            b.iter(|| black_box(build_draw_list(black_box(&cull), &req)));
        });
    }
    group.finish();
}

fn narrow_filter_benchmark(c: &mut Criterion) {
    let cull = synthetic_cull(10_000);
    let filter = DrawFilter::new(LayerMask::layer(5), &["forward"]);
    let req = request(&filter, OverrideDirective::None);

    c.bench_function("narrow_filter_10000_objects", |b| {
        b.iter(|| black_box(build_draw_list(black_box(&cull), &req)));
    });
}

fn material_override_benchmark(c: &mut Criterion) {
    let cull = synthetic_cull(10_000);
    let mut materials: SlotMap<MaterialKey, ()> = SlotMap::with_key();
    let override_material = materials.insert(());
    let filter = DrawFilter::new(LayerMask::all(), &["forward", "unlit"]);
    let req = request(
        &filter,
        OverrideDirective::Material {
            material: override_material,
            pass_index: 0,
        },
    );

    c.bench_function("material_override_10000_objects", |b| {
        b.iter(|| black_box(build_draw_list(black_box(&cull), &req)));
    });
}

criterion_group!(
    benches,
    draw_list_benchmark,
    narrow_filter_benchmark,
    material_override_benchmark
);
criterion_main!(benches);
