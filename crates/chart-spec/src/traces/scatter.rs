// File: crates/chart-spec/src/traces/scatter.rs
// Summary: Scatter trace (lines, markers, text) with fill and stacking options.

use serde::Serialize;

use super::TraceCommon;
use crate::color::Color;
use crate::encoding::{flag_set, primitive_enum, unset_flags};
use crate::font::Font;
use crate::line::Line;
use crate::marker::Marker;
use crate::types::{data, Datum};

flag_set! {
    /// Drawing mode; `"lines+markers"` is the usual combination.
    pub struct ScatterMode: u8 {
        LINES = 0 => "lines",
        MARKERS = 1 => "markers",
        TEXT = 2 => "text",
        NONE = 3 => "none",
    }
}

primitive_enum! {
    pub enum Fill {
        None => "none",
        ToZeroY => "tozeroy",
        ToZeroX => "tozerox",
        ToNextY => "tonexty",
        ToNextX => "tonextx",
        ToSelf => "toself",
        ToNext => "tonext",
    }
}

primitive_enum! {
    pub enum TextPosition {
        TopLeft => "top left",
        TopCenter => "top center",
        TopRight => "top right",
        MiddleLeft => "middle left",
        MiddleCenter => "middle center",
        MiddleRight => "middle right",
        BottomLeft => "bottom left",
        BottomCenter => "bottom center",
        BottomRight => "bottom right",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scatter {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "unset_flags")]
    pub mode: Option<ScatterMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(rename = "fillcolor", skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(rename = "connectgaps", skip_serializing_if = "Option::is_none")]
    pub connect_gaps: Option<bool>,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    pub text_position: Option<TextPosition>,
    #[serde(rename = "textfont", skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Font>,
    #[serde(rename = "stackgroup", skip_serializing_if = "Option::is_none")]
    pub stack_group: Option<String>,
}

impl Scatter {
    pub fn new<X, Y>(x: impl IntoIterator<Item = X>, y: impl IntoIterator<Item = Y>) -> Self
    where
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        Self { x: Some(data(x)), y: Some(data(y)), ..Default::default() }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|p| p.0), points.iter().map(|p| p.1))
    }

    pub fn with_mode(mut self, mode: ScatterMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }
}
