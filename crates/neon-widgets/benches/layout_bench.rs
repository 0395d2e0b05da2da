//! Benchmarks for measuring and rendering nested layouts.
//!
//! Run with: cargo bench -p neon-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use neon_layout::{Block, BlockExt, Column, LayoutCx, MeasureCache, Row, Size};
use neon_widgets::{FlexibleSpace, HorizontalSeparator, Label, ProgressBar, TextArea};
use std::hint::black_box;

/// A dashboard-like tree: `rows` framed rows of keyed cells.
fn dashboard(rows: usize, keyed: bool) -> Column {
    let mut column = Column::default().child(Label::new("Dashboard").bold());
    for r in 0..rows {
        let mut row = Row::default();
        for c in 0..4 {
            let cell = Label::new(format!("cell {r}:{c}")).padded_horizontally(1);
            row = if keyed {
                row.child(cell.keyed(format!("cell-{r}-{c}")))
            } else {
                row.child(cell)
            };
        }
        let progress = match ProgressBar::new((r % 10) as f64 / 10.0) {
            Ok(bar) => bar,
            Err(_) => continue,
        };
        column = column
            .child(row.child(FlexibleSpace).child(progress).framed())
            .child(HorizontalSeparator);
    }
    column.child(TextArea::new("Status: all systems nominal."))
}

// ============================================================================
// Measurement
// ============================================================================

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/measure");

    for rows in [4, 16, 64] {
        let plain = dashboard(rows, false);
        let keyed = dashboard(rows, true);

        group.bench_with_input(BenchmarkId::new("uncached", rows), &(), |b, _| {
            b.iter(|| black_box(plain.measure(black_box(Some(80)), None)))
        });

        group.bench_with_input(BenchmarkId::new("cached", rows), &(), |b, _| {
            let mut cache = MeasureCache::new(4096);
            b.iter(|| {
                let cx = LayoutCx::cached(&mut cache);
                black_box(keyed.measure_with(&cx, black_box(Some(80)), None))
            })
        });
    }

    group.finish();
}

// ============================================================================
// Rendering
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/render");

    for (w, h) in [(40, 20), (80, 40), (200, 120)] {
        let tree = dashboard(h / 4, true);
        let granted = Size::new(w, h);

        group.bench_with_input(
            BenchmarkId::new("uncached", format!("{w}x{h}")),
            &(),
            |b, _| b.iter(|| black_box(tree.render(granted))),
        );

        group.bench_with_input(
            BenchmarkId::new("cached", format!("{w}x{h}")),
            &(),
            |b, _| {
                let mut cache = MeasureCache::new(4096);
                b.iter(|| {
                    let cx = LayoutCx::cached(&mut cache);
                    black_box(tree.render_with(&cx, granted))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_measure, bench_render);

criterion_main!(benches);
