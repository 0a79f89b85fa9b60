//! Benchmarks for partition solving and region layout.
//!
//! Run with: cargo bench -p folio-layout

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use folio_core::event::PointerEvent;
use folio_core::geometry::Rect;
use folio_layout::{
    FocusState, GridCell, GridConfig, GridLayout, LayoutConfig, MediaDescriptor, MediaGrid,
    PartitionSolver,
};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/solve");
    let solver = PartitionSolver::new(&LayoutConfig::default()).expect("default config is valid");

    group.bench_function("no_focus", |b| {
        b.iter(|| black_box(solver.solve(black_box(FocusState::NoFocus))))
    });
    group.bench_function("focused", |b| {
        let focus = FocusState::FocusedAt(GridCell::new(1, 2));
        b.iter(|| black_box(solver.solve(black_box(focus))))
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/layout");
    let solver = PartitionSolver::new(&LayoutConfig::default()).expect("default config is valid");
    let spec = solver.solve(FocusState::FocusedAt(GridCell::new(0, 1)));

    for (w, h) in [(120u16, 40u16), (1920, 1080), (u16::MAX, u16::MAX)] {
        let area = Rect::from_size(w, h);
        group.bench_with_input(BenchmarkId::new("compute", w), &area, |b, &area| {
            b.iter(|| black_box(GridLayout::compute(area, &spec, 4)))
        });
    }

    group.finish();
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/pointer");
    let area = Rect::from_size(1200, 800);
    let tiles: Vec<_> = (0..9)
        .map(|i| MediaDescriptor::image(format!("{i}.png"), ""))
        .collect();

    group.bench_function("diagonal_sweep", |b| {
        b.iter_batched(
            || {
                MediaGrid::new(GridConfig::default().with_tiles(tiles.clone()))
                    .expect("default config is valid")
            },
            |mut grid| {
                for step in 0..100u16 {
                    grid.handle_pointer(area, PointerEvent::moved(step * 12, step * 8));
                }
                black_box(grid.render(area))
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_solve, bench_layout, bench_pointer_sweep);

criterion_main!(benches);
