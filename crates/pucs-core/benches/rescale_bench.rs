// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Rescaling Engine Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pucs_core::codata::codata_2018;
use pucs_core::engine::RescalingEngine;
use pucs_core::presets::UnitSystemPreset;
use pucs_core::registry::ConstantRegistry;
use pucs_types::constant::PhysicalConstant;
use std::hint::black_box;

/// The built-in table repeated `copies` times under fresh ids, so the
/// parallel map has enough work to show up.
fn make_registry(base: &ConstantRegistry, copies: usize) -> ConstantRegistry {
    let mut reg = ConstantRegistry::new();
    for i in 0..copies {
        for c in base {
            let copy = PhysicalConstant::new(
                format!("{}_{}", c.id(), i),
                c.symbol(),
                c.si_value(),
                c.dimensions().clone(),
                c.description(),
            )
            .expect("copied constant should validate");
            reg.push(copy).expect("ids are unique");
        }
    }
    reg
}

fn bench_rescale(c: &mut Criterion) {
    let base = codata_2018().expect("built-in table should load");
    let sys = UnitSystemPreset::Natural
        .build(&base)
        .expect("natural preset should build");
    let mut group = c.benchmark_group("rescale_registry");

    for &copies in &[1usize, 16, 256] {
        let reg = make_registry(&base, copies);

        group.bench_with_input(
            BenchmarkId::new("natural", reg.len()),
            &reg,
            |b, reg| {
                let engine = RescalingEngine::new(&sys);
                b.iter(|| black_box(engine.rescale(reg).expect("rescale should succeed")));
            },
        );
    }

    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    let reg = codata_2018().expect("built-in table should load");
    let mut group = c.benchmark_group("build_preset");
    for preset in UnitSystemPreset::ALL {
        group.bench_function(preset.name(), |b| {
            b.iter(|| black_box(preset.build(&reg).expect("preset should build")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rescale, bench_presets);
criterion_main!(benches);
