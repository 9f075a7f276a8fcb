// File: crates/chart-spec/tests/snapshot.rs
// Purpose: Golden JSON snapshot harness with bless flow.
// Behavior:
// - Builds deterministic figures and encodes them to JSON values.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares parsed JSON for equality (key order ignored).
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::path::PathBuf;

use chart_spec::hover::HoverInfo;
use chart_spec::layout::{BarMode, HoverMode};
use chart_spec::traces::box_plot::BoxMean;
use chart_spec::traces::scatter::ScatterMode;
use chart_spec::{
    Axis, Bar, BoxPlot, Candle, Candlestick, Color, CommonAttributes, Figure, Heatmap, Histogram, Layout, Line,
    Ohlc, Palette, Pie, Scatter, Theme,
};
use serde_json::Value;

fn check_snapshot(name: &str, fig: &Figure) {
    let got = fig.to_value().expect("encode figure");
    let snap_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(format!("{name}.json"));

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        let text = serde_json::to_string_pretty(&got).expect("pretty json");
        std::fs::write(&snap_path, text + "\n").expect("write snapshot");
        eprintln!("[snapshot] Updated {}", snap_path.display());
        return;
    }

    if snap_path.exists() {
        let text = std::fs::read_to_string(&snap_path).expect("read snapshot");
        let want: Value = serde_json::from_str(&text).expect("parse snapshot");
        assert_eq!(got, want, "encoded figure differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

const SNAPSHOTS: [&str; 4] = ["basic_figure", "financial_figure", "statistical_figure", "matrix_pie_figure"];

#[test]
fn golden_snapshots_are_committed() {
    let snap_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    for name in SNAPSHOTS {
        let path = snap_dir.join(format!("{name}.json"));
        assert!(path.exists(), "golden snapshot not committed: {}", path.display());
    }
}

fn candles() -> Vec<Candle> {
    let rows = [
        ("2024-01-02", 10.0, 11.0, 9.5, 10.5),
        ("2024-01-03", 10.5, 10.8, 9.8, 10.0),
        ("2024-01-04", 10.0, 12.0, 10.0, 11.8),
    ];
    rows.iter()
        .map(|&(t, o, h, l, c)| Candle::try_new(t, o, h, l, c).expect("valid candle"))
        .collect()
}

#[test]
fn golden_basic_figure() {
    let fig = Figure::new()
        .with_trace(
            Scatter::from_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])
                .with_name("wave")
                .with_mode(ScatterMode::LINES | ScatterMode::MARKERS)
                .with_line(Line::new(Color::Hex(0x1f77b4), 2.0)),
        )
        .with_layout(Layout::new().with_title("Basic").with_axes(Axis::new("X", 0.0, 2.0), Axis::new("Y", 0.0, 1.0)));
    check_snapshot("basic_figure", &fig);
}

#[test]
fn golden_financial_figure() {
    let cs = candles();
    let mut layout = Theme::light().apply(Layout::new().with_axes(Axis::date("Date"), Axis::default()));
    layout.hover_mode = Some(HoverMode::XUnified);
    let fig = Figure::new()
        .with_trace(Candlestick::from_candles(&cs).with_name("candles").with_colors("green", "red"))
        .with_trace(Ohlc::from_candles(&cs).with_name("ohlc").with_visible(chart_spec::traces::Visible::LegendOnly))
        .with_layout(layout);
    check_snapshot("financial_figure", &fig);
}

#[test]
fn golden_statistical_figure() {
    let values = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 8.0];
    let mut layout = Layout::new();
    layout.bar_mode = Some(BarMode::Overlay);
    let fig = Figure::new()
        .with_trace(Histogram::new(values.clone()).with_bins(4).with_opacity(0.6))
        .with_trace(BoxPlot::new(values).with_mean(BoxMean::Sd).with_hover_info(HoverInfo::Y))
        .with_trace(Bar::new(["a", "b", "c"], vec![1.0, -2.0, 0.5]).with_base(0.0))
        .with_layout(layout);
    check_snapshot("statistical_figure", &fig);
}

#[test]
fn golden_matrix_and_pie_figure() {
    let fig = Figure::new()
        .with_trace(Heatmap::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).with_color_scale(Palette::Hot))
        .with_trace(Pie::new(["up", "down"], vec![3.0, 1.0]).with_hole(0.5));
    check_snapshot("matrix_pie_figure", &fig);
}
