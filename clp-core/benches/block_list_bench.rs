// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Benchmarks `generate_general_blocks` at a representative scale —
//! the part of the engine explicitly called out as needing to "scale to
//! ~10⁴ candidate blocks".

use clp_core::block_list::generate_general_blocks;
use clp_core::boxtype::BoxType;
use clp_core::geom::ContainerDims;
use clp_core::items::ItemMultiset;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn sample_items() -> ItemMultiset {
    let mut items = ItemMultiset::new();
    items.set(BoxType::new(1, 40, 35, 30, true, true, true, 2), 30);
    items.set(BoxType::new(2, 55, 40, 25, true, false, true, 3), 20);
    items.set(BoxType::new(3, 60, 50, 45, false, true, false, 5), 15);
    items
}

fn bench_generate_general_blocks(c: &mut Criterion) {
    let container = ContainerDims {
        l: 587,
        w: 233,
        h: 220,
    };

    c.bench_function("generate_general_blocks/3_types_max_bl_1000", |b| {
        b.iter_batched_ref(
            sample_items,
            |items| {
                black_box(generate_general_blocks(items, container, 0.98, 1000));
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_generate_general_blocks);
criterion_main!(benches);
