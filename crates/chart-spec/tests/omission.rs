// File: crates/chart-spec/tests/omission.rs
// Purpose: Unset fields must vanish from the output instead of serializing as null.

use chart_spec::axis::SpikeMode;
use chart_spec::config::{ImageButtonOptions, ImageFormat};
use chart_spec::hover::HoverInfo;
use chart_spec::layout::TraceOrder;
use chart_spec::traces::scatter::ScatterMode;
use chart_spec::{Axis, CommonAttributes, Figure, Layout, Legend, Marker, Scatter};
use serde_json::{json, Value};

fn assert_no_nulls(v: &Value, path: &str) {
    match v {
        Value::Null => panic!("null at {path}"),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                assert_no_nulls(item, &format!("{path}[{i}]"));
            }
        }
        Value::Object(map) => {
            for (k, item) in map {
                assert_no_nulls(item, &format!("{path}.{k}"));
            }
        }
        _ => {}
    }
}

#[test]
fn one_of_five_fields_gives_single_key_object() {
    let opts = ImageButtonOptions { format: Some(ImageFormat::Svg), ..Default::default() };
    let v = serde_json::to_value(&opts).unwrap();
    assert_eq!(v, json!({"format": "svg"}));
    assert_eq!(v.as_object().map(|m| m.len()), Some(1));
}

#[test]
fn default_objects_encode_empty() {
    assert_eq!(serde_json::to_value(Axis::default()).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(Layout::default()).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(Marker::default()).unwrap(), json!({}));
}

#[test]
fn trace_without_fields_is_only_its_type() {
    let fig = Figure::new().with_trace(Scatter::default());
    assert_eq!(fig.to_value().unwrap(), json!({"data": [{"type": "scatter"}]}));
}

#[test]
fn internal_names_map_to_wire_keys() {
    let axis = Axis {
        show_grid: Some(false),
        zero_line: Some(true),
        tick_angle: Some(-45.0),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&axis).unwrap(),
        json!({"showgrid": false, "zeroline": true, "tickangle": -45.0})
    );
}

#[test]
fn empty_flag_sets_are_omitted() {
    let axis = Axis { spike_mode: Some(SpikeMode::empty()), ..Default::default() };
    assert_eq!(serde_json::to_value(&axis).unwrap(), json!({}));

    let legend = Legend { trace_order: Some(TraceOrder::empty()), ..Default::default() };
    assert_eq!(serde_json::to_value(&legend).unwrap(), json!({}));

    let s = Scatter::default().with_mode(ScatterMode::empty()).with_hover_info(HoverInfo::empty());
    let fig = Figure::new().with_trace(s);
    assert_eq!(fig.to_value().unwrap(), json!({"data": [{"type": "scatter"}]}));
}

#[test]
fn empty_lists_are_omitted() {
    let layout = Layout { shapes: Some(vec![]), colorway: Some(vec![]), ..Default::default() };
    assert_eq!(serde_json::to_value(&layout).unwrap(), json!({}));
}

#[test]
fn populated_figure_has_no_nulls() {
    let fig = Figure::new()
        .with_trace(
            Scatter::new(vec![1.0, 2.0], vec![3.0, 4.0])
                .with_name("a")
                .with_mode(ScatterMode::LINES)
                .with_marker(Marker::new().with_color("red")),
        )
        .with_layout(Layout::new().with_title("t").with_axes(Axis::new("x", 0.0, 1.0), Axis::default()));
    assert_no_nulls(&fig.to_value().unwrap(), "$");
}
