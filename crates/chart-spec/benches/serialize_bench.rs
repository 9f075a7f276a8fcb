use chart_spec::traces::scatter::ScatterMode;
use chart_spec::{Axis, Candle, Candlestick, Figure, Layout, Scatter, Theme};
use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};

fn gen_candles(n: usize) -> Vec<Candle> {
    let mut v = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        let o = price;
        let c = o + if i % 3 == 0 { -0.4 } else { 0.2 };
        v.push(Candle { t: (i as i64).into(), o, h: o.max(c) + 1.0, l: o.min(c) - 1.0, c });
        price = c;
    }
    v
}

fn gen_figure(n: usize) -> Figure {
    let candles = gen_candles(n);
    let close: Vec<(f64, f64)> = candles.iter().enumerate().map(|(i, k)| (i as f64, k.c)).collect();
    Figure::new()
        .with_trace(Candlestick::from_candles(&candles))
        .with_trace(Scatter::from_points(&close).with_mode(ScatterMode::LINES))
        .with_layout(Theme::dark().apply(Layout::new().with_axes(Axis::new("t", 0.0, n as f64), Axis::default())))
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("figure_to_json");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let fig = gen_figure(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &fig, |b, f| {
            b.iter(|| black_box(f.to_json().map(|s| s.len())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialize);
criterion_main!(benches);
