// File: crates/chart-spec/tests/figure.rs
// Purpose: End-to-end figure assembly, trace tagging, theming and JSON file output.

use chart_spec::config::{DisplayModeBar, ScrollZoom, ScrollZoomTargets};
use chart_spec::hover::HoverInfo;
use chart_spec::layout::HoverMode;
use chart_spec::traces::box_plot::BoxPoints;
use chart_spec::traces::pie::PieTextInfo;
use chart_spec::traces::scatter::ScatterMode;
use chart_spec::traces::Visible;
use chart_spec::{
    theme, AutoRange, Axis, Bar, BoxPlot, Candle, Candlestick, CommonAttributes, Config, Figure, Font, Heatmap,
    Histogram, Layout, Margin, Ohlc, Palette, Pie, Scatter, Shape, Theme, WriteOptions,
};
use chart_spec::types::{HEIGHT, WIDTH};
use serde_json::json;

#[test]
fn scatter_trace_wire_shape() {
    let s = Scatter::new(vec![0, 1, 2], vec![1.0, 3.0, 2.0])
        .with_name("series")
        .with_mode(ScatterMode::MARKERS | ScatterMode::LINES)
        .with_hover_info(HoverInfo::X | HoverInfo::Y | HoverInfo::NAME)
        .with_visible(Visible::LegendOnly);
    let v = Figure::new().with_trace(s).to_value().unwrap();
    assert_eq!(
        v,
        json!({"data": [{
            "type": "scatter",
            "name": "series",
            "visible": "legendonly",
            "hoverinfo": "x+y+name",
            "x": [0, 1, 2],
            "y": [1.0, 3.0, 2.0],
            "mode": "lines+markers",
        }]})
    );
}

#[test]
fn every_trace_kind_carries_its_type_tag() {
    let candles = vec![Candle::try_new(0, 2.0, 3.0, 1.0, 2.5).unwrap()];
    let mut fig = Figure::new();
    fig.add_trace(Scatter::default());
    fig.add_trace(Bar::default());
    fig.add_trace(Histogram::default());
    fig.add_trace(Candlestick::from_candles(&candles));
    fig.add_trace(Ohlc::from_candles(&candles));
    fig.add_trace(Heatmap::default());
    fig.add_trace(BoxPlot::default());
    fig.add_trace(Pie::default());

    let v = fig.to_value().unwrap();
    let kinds: Vec<_> = v["data"].as_array().unwrap().iter().map(|t| t["type"].as_str().unwrap()).collect();
    assert_eq!(kinds, ["scatter", "bar", "histogram", "candlestick", "ohlc", "heatmap", "box", "pie"]);
    for (t, wire) in fig.data.iter().zip(&kinds) {
        assert_eq!(t.kind(), *wire);
    }
}

#[test]
fn candlestick_columns_and_colors() {
    let candles = vec![
        Candle::try_new(0, 2.0, 3.0, 1.0, 2.5).unwrap(),
        Candle::try_new(1, 2.5, 3.5, 2.0, 2.0).unwrap(),
    ];
    let t = Candlestick::from_candles(&candles).with_colors("green", "red").with_name("px");
    let v = serde_json::to_value(chart_spec::Trace::from(t)).unwrap();
    assert_eq!(v["open"], json!([2.0, 2.5]));
    assert_eq!(v["high"], json!([3.0, 3.5]));
    assert_eq!(v["low"], json!([1.0, 2.0]));
    assert_eq!(v["close"], json!([2.5, 2.0]));
    assert_eq!(v["increasing"], json!({"line": {"color": "green"}, "fillcolor": "green"}));
    assert_eq!(v["decreasing"]["fillcolor"], json!("red"));
}

#[test]
fn heatmap_box_pie_specifics() {
    let h = Heatmap::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).with_color_scale(Palette::Viridis);
    let v = serde_json::to_value(chart_spec::Trace::from(h)).unwrap();
    assert_eq!(v["z"], json!([[1.0, 2.0], [3.0, 4.0]]));
    assert_eq!(v["colorscale"], json!("Viridis"));

    let b = BoxPlot::new(vec![1.0, 2.0, 9.0]).with_points(BoxPoints::Off);
    let v = serde_json::to_value(chart_spec::Trace::from(b)).unwrap();
    assert_eq!(v["boxpoints"], json!(false));

    let p = Pie::new(["a", "b"], vec![1.0, 3.0]).with_hole(0.4).with_text_info(PieTextInfo::PERCENT | PieTextInfo::LABEL);
    let v = serde_json::to_value(chart_spec::Trace::from(p)).unwrap();
    assert_eq!(v["labels"], json!(["a", "b"]));
    assert_eq!(v["textinfo"], json!("label+percent"));
    assert_eq!(v["hole"], json!(0.4));
}

#[test]
fn layout_and_config_wire_shape() {
    let mut layout = Layout::new()
        .with_title("Prices")
        .with_size(800, 400)
        .with_axes(Axis::date("Time"), Axis::new("Price", 0.0, 10.0).with_auto_range(AutoRange::Reversed));
    layout.margin = Some(Margin::new(72, 24, 24, 56));
    layout.hover_mode = Some(HoverMode::Off);
    layout.add_shape(Shape::hline(5.0, "gray"));

    let config = Config {
        display_mode_bar: Some(DisplayModeBar::Never),
        scroll_zoom: Some(ScrollZoom::Only(ScrollZoomTargets::CARTESIAN)),
        ..Default::default()
    };
    let v = Figure::new().with_layout(layout).with_config(config).to_value().unwrap();

    assert_eq!(v["data"], json!([]));
    assert_eq!(v["layout"]["title"], json!({"text": "Prices"}));
    assert_eq!(v["layout"]["margin"], json!({"l": 72, "r": 24, "t": 24, "b": 56}));
    assert_eq!(v["layout"]["hovermode"], json!(false));
    assert_eq!(v["layout"]["xaxis"], json!({"title": {"text": "Time"}, "type": "date", "autorange": true}));
    assert_eq!(v["layout"]["yaxis"]["autorange"], json!("reversed"));
    assert_eq!(v["layout"]["yaxis"]["range"], json!([0.0, 10.0]));
    assert_eq!(v["layout"]["shapes"][0]["type"], json!("line"));
    assert_eq!(v["layout"]["shapes"][0]["xref"], json!("paper"));
    assert_eq!(v["config"], json!({"displayModeBar": false, "scrollZoom": "cartesian"}));
}

#[test]
fn default_size_and_layout_font() {
    let mut layout = Layout::new().with_size(WIDTH, HEIGHT);
    layout.font = Some(Font::sized(13.0).with_family("Inter").with_color("black"));
    let v = serde_json::to_value(&layout).unwrap();
    assert_eq!(v["width"], json!(700));
    assert_eq!(v["height"], json!(450));
    assert_eq!(v["font"], json!({"family": "Inter", "size": 13.0, "color": "black"}));
}

#[test]
fn trace_name_reads_common_attributes() {
    let fig = Figure::new().with_trace(Bar::default().with_name("volume")).with_trace(Pie::default());
    let names: Vec<_> = fig.data.iter().map(|t| t.name()).collect();
    assert_eq!(names, [Some("volume"), None]);
}

#[test]
fn log_axis_range_is_in_exponents() {
    let a = Axis::log("v", 10.0, 1000.0);
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["type"], json!("log"));
    let range: Vec<f64> = v["range"].as_array().unwrap().iter().map(|x| x.as_f64().unwrap()).collect();
    assert!((range[0] - 1.0).abs() < 1e-9 && (range[1] - 3.0).abs() < 1e-9, "{range:?}");
}

#[test]
fn log_axis_clamps_non_finite_bounds() {
    let assert_range = |a: Axis, want: [f64; 2]| {
        let v = serde_json::to_value(&a).unwrap();
        let got: Vec<f64> =
            v["range"].as_array().unwrap().iter().map(|x| x.as_f64().expect("finite range endpoint")).collect();
        assert!((got[0] - want[0]).abs() < 1e-9 && (got[1] - want[1]).abs() < 1e-9, "{got:?} != {want:?}");
    };
    assert_range(Axis::log("v", f64::NAN, 100.0), [-12.0, 2.0]);
    assert_range(Axis::log("v", f64::NEG_INFINITY, 100.0), [-12.0, 2.0]);
    assert_range(Axis::log("v", 1.0, f64::INFINITY), [0.0, 1.0]);
    assert_range(Axis::log("v", 1.0, f64::NAN), [0.0, 1.0]);
    let both = Axis::log("v", f64::NAN, f64::INFINITY);
    assert!(!serde_json::to_string(&both).unwrap().contains("null"));
}

#[test]
fn non_finite_candles_are_rejected() {
    let err = Candle::try_new(0, f64::NAN, f64::NAN, f64::NAN, f64::NAN).unwrap_err();
    assert!(matches!(err, chart_spec::ChartError::InvalidCandle("non-finite price")));
    assert!(Candle::try_new(0, 1.0, 2.0, f64::NEG_INFINITY, 1.5).is_err());
}

#[test]
fn theme_paints_layout_and_axes() {
    let layout = Theme::dark().apply(Layout::new().with_axes(Axis::new("x", 0.0, 1.0), Axis::default()));
    let v = serde_json::to_value(&layout).unwrap();
    assert_eq!(v["paper_bgcolor"], json!("rgb(18, 18, 20)"));
    assert_eq!(v["font"]["color"], json!("rgb(235, 235, 245)"));
    assert_eq!(v["xaxis"]["gridcolor"], json!("rgb(40, 40, 45)"));
    // Non-color fields survive.
    assert_eq!(v["xaxis"]["title"], json!({"text": "x"}));
    assert_eq!(v["colorway"].as_array().map(|a| a.len()), Some(4));

    assert_eq!(theme::find("SOLARIZED-LIGHT").name, "solarized-light");
    assert_eq!(theme::find("nope").name, "dark");
    assert_eq!(theme::presets().len(), 5);
}

#[test]
fn write_json_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/out/fig.json");
    let fig = Figure::new().with_trace(Scatter::from_points(&[(0.0, 1.0), (1.0, 2.0)]));

    fig.write_json(&out, &WriteOptions::default()).expect("write");
    let text = std::fs::read_to_string(&out).expect("read back");
    let back: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(back, fig.to_value().unwrap());
    assert!(text.contains('\n'), "pretty output by default");

    let compact = WriteOptions { pretty: false, ..Default::default() };
    fig.write_json(&out, &compact).expect("write compact");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), fig.to_json().unwrap());
}

#[test]
fn write_json_without_create_dirs_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("missing/fig.json");
    let opts = WriteOptions { create_dirs: false, ..Default::default() };
    let err = Figure::new().write_json(&out, &opts).unwrap_err();
    match err {
        chart_spec::ChartError::Io { path, .. } => assert_eq!(path, out),
        other => panic!("unexpected error: {other}"),
    }
}
