// File: crates/chart-spec/src/layout.rs
// Summary: Figure layout: title, size, legend, axes, interaction modes, annotations and shapes.

use serde::Serialize;

use crate::axis::Axis;
use crate::color::Color;
use crate::encoding::{empty_list, flag_set, primitive_enum, unset_flags};
use crate::font::{Font, Title};
use crate::hover::HoverLabel;
use crate::line::{DashType, Line};
use crate::types::{Datum, Margin, Orientation, XAnchor, YAnchor};

primitive_enum! {
    /// Hover interaction. `Off` disables hover entirely and is a boolean on the wire.
    pub enum HoverMode {
        Off => false,
        X => "x",
        Y => "y",
        Closest => "closest",
        XUnified => "x unified",
        YUnified => "y unified",
    }
}

primitive_enum! {
    /// Drag interaction. `Off` is a boolean on the wire.
    pub enum DragMode {
        Zoom => "zoom",
        Pan => "pan",
        Select => "select",
        Lasso => "lasso",
        Orbit => "orbit",
        TurnTable => "turntable",
        Off => false,
    }
}

primitive_enum! {
    pub enum BarMode {
        Stack => "stack",
        Group => "group",
        Overlay => "overlay",
        Relative => "relative",
    }
}

primitive_enum! {
    /// Bar normalization. `Off` is the engine's empty string and is emitted as-is.
    pub enum BarNorm {
        Off => "",
        Fraction => "fraction",
        Percent => "percent",
    }
}

primitive_enum! {
    pub enum BoxMode {
        Group => "group",
        Overlay => "overlay",
    }
}

primitive_enum! {
    pub enum ItemSizing {
        Trace => "trace",
        Constant => "constant",
    }
}

flag_set! {
    /// Legend item ordering. `NORMAL` stands alone on the engine side.
    pub struct TraceOrder: u8 {
        REVERSED = 0 => "reversed",
        GROUPED = 1 => "grouped",
        NORMAL = 2 => "normal",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
    #[serde(rename = "bordercolor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(rename = "borderwidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(rename = "traceorder", skip_serializing_if = "unset_flags")]
    pub trace_order: Option<TraceOrder>,
    #[serde(rename = "itemsizing", skip_serializing_if = "Option::is_none")]
    pub item_sizing: Option<ItemSizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(rename = "xanchor", skip_serializing_if = "Option::is_none")]
    pub x_anchor: Option<XAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "yanchor", skip_serializing_if = "Option::is_none")]
    pub y_anchor: Option<YAnchor>,
    #[serde(rename = "valign", skip_serializing_if = "Option::is_none")]
    pub v_align: Option<YAnchor>,
}

primitive_enum! {
    pub enum ArrowHead {
        None => 0_i64,
        Triangle => 1_i64,
        Wide => 2_i64,
        Barb => 3_i64,
        Stealth => 4_i64,
        Square => 6_i64,
        Circle => 7_i64,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Annotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Datum>,
    /// `"paper"` or an axis id such as `"x"` / `"x2"`.
    #[serde(rename = "xref", skip_serializing_if = "Option::is_none")]
    pub x_ref: Option<String>,
    #[serde(rename = "yref", skip_serializing_if = "Option::is_none")]
    pub y_ref: Option<String>,
    #[serde(rename = "xanchor", skip_serializing_if = "Option::is_none")]
    pub x_anchor: Option<XAnchor>,
    #[serde(rename = "yanchor", skip_serializing_if = "Option::is_none")]
    pub y_anchor: Option<YAnchor>,
    #[serde(rename = "showarrow", skip_serializing_if = "Option::is_none")]
    pub show_arrow: Option<bool>,
    #[serde(rename = "arrowhead", skip_serializing_if = "Option::is_none")]
    pub arrow_head: Option<ArrowHead>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
}

impl Annotation {
    pub fn new(text: impl Into<String>, x: impl Into<Datum>, y: impl Into<Datum>) -> Self {
        Self { text: Some(text.into()), x: Some(x.into()), y: Some(y.into()), ..Default::default() }
    }
}

primitive_enum! {
    pub enum ShapeType {
        Line => "line",
        Rect => "rect",
        Circle => "circle",
        Path => "path",
    }
}

primitive_enum! {
    pub enum ShapeLayer {
        Below => "below",
        Above => "above",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<ShapeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x0: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y0: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x1: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y1: Option<Datum>,
    #[serde(rename = "xref", skip_serializing_if = "Option::is_none")]
    pub x_ref: Option<String>,
    #[serde(rename = "yref", skip_serializing_if = "Option::is_none")]
    pub y_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(rename = "fillcolor", skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<ShapeLayer>,
}

impl Shape {
    /// Horizontal guide spanning the full plot width at data value `y`.
    pub fn hline(y: f64, color: impl Into<Color>) -> Self {
        Self {
            shape_type: Some(ShapeType::Line),
            x_ref: Some("paper".into()),
            x0: Some(Datum::Float(0.0)),
            x1: Some(Datum::Float(1.0)),
            y0: Some(Datum::Float(y)),
            y1: Some(Datum::Float(y)),
            line: Some(Line::new(color, 1.0).with_dash(DashType::Dash)),
            ..Default::default()
        }
    }

    /// Vertical guide spanning the full plot height at data value `x`.
    pub fn vline(x: impl Into<Datum>, color: impl Into<Color>) -> Self {
        let x = x.into();
        Self {
            shape_type: Some(ShapeType::Line),
            y_ref: Some("paper".into()),
            x0: Some(x.clone()),
            x1: Some(x),
            y0: Some(Datum::Float(0.0)),
            y1: Some(Datum::Float(1.0)),
            line: Some(Line::new(color, 1.0).with_dash(DashType::Dash)),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(rename = "autosize", skip_serializing_if = "Option::is_none")]
    pub auto_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Decimal then thousands separator, e.g. `".,"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separators: Option<String>,
    #[serde(rename = "paper_bgcolor", skip_serializing_if = "Option::is_none")]
    pub paper_bg_color: Option<Color>,
    #[serde(rename = "plot_bgcolor", skip_serializing_if = "Option::is_none")]
    pub plot_bg_color: Option<Color>,
    #[serde(skip_serializing_if = "empty_list")]
    pub colorway: Option<Vec<Color>>,
    #[serde(rename = "hovermode", skip_serializing_if = "Option::is_none")]
    pub hover_mode: Option<HoverMode>,
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
    #[serde(rename = "dragmode", skip_serializing_if = "Option::is_none")]
    pub drag_mode: Option<DragMode>,
    #[serde(rename = "barmode", skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    #[serde(rename = "barnorm", skip_serializing_if = "Option::is_none")]
    pub bar_norm: Option<BarNorm>,
    #[serde(rename = "bargap", skip_serializing_if = "Option::is_none")]
    pub bar_gap: Option<f64>,
    #[serde(rename = "bargroupgap", skip_serializing_if = "Option::is_none")]
    pub bar_group_gap: Option<f64>,
    #[serde(rename = "boxmode", skip_serializing_if = "Option::is_none")]
    pub box_mode: Option<BoxMode>,
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(rename = "xaxis2", skip_serializing_if = "Option::is_none")]
    pub x_axis2: Option<Axis>,
    #[serde(rename = "yaxis2", skip_serializing_if = "Option::is_none")]
    pub y_axis2: Option<Axis>,
    #[serde(skip_serializing_if = "empty_list")]
    pub annotations: Option<Vec<Annotation>>,
    #[serde(skip_serializing_if = "empty_list")]
    pub shapes: Option<Vec<Shape>>,
}

impl Layout {
    pub fn new() -> Self { Self::default() }

    pub fn with_title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axes(mut self, x: Axis, y: Axis) -> Self {
        self.x_axis = Some(x);
        self.y_axis = Some(y);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.get_or_insert_with(Vec::new).push(shape);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.get_or_insert_with(Vec::new).push(annotation);
    }
}
