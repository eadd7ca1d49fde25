//! Section scan micro-benchmarks
//!
//! Measures the viewport band scan on its own and a full wheel dispatch
//! (debouncer plus scan plus class updates) for pages of increasing length.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pagenav::{
    EventRouter, InMemoryViewSurface, NavConfig, NavEvent, ViewportBand, VirtualClock,
    pick_nearest_index,
};
use std::hint::black_box;

const SECTION_HEIGHT: f64 = 800.0;

fn page(count: usize) -> InMemoryViewSurface {
    (0..count).fold(InMemoryViewSurface::new().with_menu_height(60.0), |surface, i| {
        surface.with_section(
            format!("section{}", i + 1),
            format!("Section {}", i + 1),
            i as f64 * SECTION_HEIGHT,
        )
    })
}

fn bench_pick_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_nearest_index");
    let band = ViewportBand::default();

    for count in [10usize, 100, 1000] {
        // Viewport parked over the last section: worst case for a first-match scan.
        let scroll = (count - 1) as f64 * SECTION_HEIGHT - 100.0;
        let offsets: Vec<f64> = (0..count)
            .map(|i| i as f64 * SECTION_HEIGHT - scroll)
            .collect();

        group.bench_with_input(BenchmarkId::new("sections", count), &offsets, |b, offsets| {
            b.iter(|| pick_nearest_index(black_box(offsets), band))
        });
    }

    group.finish();
}

fn bench_wheel_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_dispatch");

    for count in [10usize, 100, 1000] {
        group.bench_function(BenchmarkId::new("sections", count), |b| {
            let mut router =
                EventRouter::start(page(count), VirtualClock::new(), NavConfig::default())
                    .expect("Failed to start router");
            let mut step = 0usize;
            b.iter(|| {
                step = (step + 1) % count;
                router
                    .surface_mut()
                    .set_scroll_offset(step as f64 * SECTION_HEIGHT - 100.0);
                router.dispatch(black_box(NavEvent::Wheel));
                router.run_until_idle();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pick_nearest, bench_wheel_dispatch);
criterion_main!(benches);
