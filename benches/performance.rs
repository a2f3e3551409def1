use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio::config::{Config, DisplayConfig};
use folio::content::ContentStore;
use folio::route::Route;
use folio::tui::action::Action;
use folio::tui::pages::{project, work, LayoutContext};
use folio::tui::reducer::reduce;
use folio::tui::reducers::mount_route;
use folio::tui::state::AppState;
use std::sync::Arc;
use std::time::Instant;

fn bundled() -> ContentStore {
    ContentStore::bundled().expect("bundled content should parse")
}

/// Benchmark page layout for the two longest route kinds
fn bench_page_layout(c: &mut Criterion) {
    let content = bundled();
    let display = DisplayConfig::default();
    let project = content
        .project("atlas-design-system")
        .expect("bundled project");
    let company = content.company_or_first("northwind").expect("bundled company");

    let mut group = c.benchmark_group("page_layout");

    for width in [80u16, 110] {
        let ctx = LayoutContext {
            width,
            asset_base: "https://assets.example.com",
            display: &display,
        };

        group.bench_function(format!("project_{}", width), |b| {
            b.iter(|| project::layout(black_box(project), black_box(&ctx)))
        });

        group.bench_function(format!("work_{}", width), |b| {
            b.iter(|| work::layout(black_box(company), black_box(&ctx)))
        });
    }

    group.finish();
}

/// Benchmark reducer action dispatch on a mounted work page
fn bench_reducer_dispatch(c: &mut Criterion) {
    let mut state = AppState::new(Arc::new(bundled()), Config::default(), Instant::now());
    state.width = 120;
    state.height = 40;
    mount_route(&mut state, Route::Work("northwind".to_string()));

    let mut group = c.benchmark_group("reducer");

    group.bench_function("tick", |b| {
        b.iter(|| {
            let taken = std::mem::take(&mut state);
            let (new_state, _effect) = reduce(black_box(taken), black_box(Action::Tick));
            state = new_state;
        })
    });

    group.bench_function("scroll_and_tick", |b| {
        let mut down = true;
        b.iter(|| {
            let delta = if down { 3 } else { -3 };
            down = !down;
            let taken = std::mem::take(&mut state);
            let (scrolled, _) = reduce(taken, Action::ScrollBy(delta));
            let (new_state, _effect) = reduce(scrolled, black_box(Action::Tick));
            state = new_state;
        })
    });

    group.bench_function("resize_relayout", |b| {
        let mut wide = true;
        b.iter(|| {
            let width = if wide { 100 } else { 140 };
            wide = !wide;
            let taken = std::mem::take(&mut state);
            let (new_state, _effect) = reduce(taken, black_box(Action::Resize { width, height: 40 }));
            state = new_state;
        })
    });

    group.finish();
}

criterion_group!(benches, bench_page_layout, bench_reducer_dispatch);
criterion_main!(benches);
