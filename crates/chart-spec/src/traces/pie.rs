// File: crates/chart-spec/src/traces/pie.rs
// Summary: Pie / donut trace.

use serde::Serialize;

use super::TraceCommon;
use crate::color::Color;
use crate::encoding::{empty_list, flag_set, primitive_enum, unset_flags};
use crate::font::Font;
use crate::line::Line;
use crate::types::{data, Datum, Dim, Domain};

flag_set! {
    /// Text drawn on each sector.
    pub struct PieTextInfo: u8 {
        LABEL = 0 => "label",
        TEXT = 1 => "text",
        VALUE = 2 => "value",
        PERCENT = 3 => "percent",
        NONE = 4 => "none",
    }
}

primitive_enum! {
    pub enum PieTextPosition {
        Inside => "inside",
        Outside => "outside",
        Auto => "auto",
        None => "none",
    }
}

primitive_enum! {
    pub enum PieDirection {
        Clockwise => "clockwise",
        CounterClockwise => "counterclockwise",
    }
}

/// Sector styling; pies color sectors through `colors`, not `color`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PieMarker {
    #[serde(skip_serializing_if = "empty_list")]
    pub colors: Option<Vec<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Pie {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    /// Fraction of the radius cut out of the middle (donut).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull: Option<Dim<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<PieDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(rename = "textinfo", skip_serializing_if = "unset_flags")]
    pub text_info: Option<PieTextInfo>,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    pub text_position: Option<PieTextPosition>,
    #[serde(rename = "textfont", skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PieMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl Pie {
    pub fn new<L: Into<Datum>>(labels: impl IntoIterator<Item = L>, values: Vec<f64>) -> Self {
        Self { labels: Some(data(labels)), values: Some(values), ..Default::default() }
    }

    pub fn with_hole(mut self, hole: f64) -> Self {
        self.hole = Some(hole);
        self
    }

    pub fn with_text_info(mut self, info: PieTextInfo) -> Self {
        self.text_info = Some(info);
        self
    }
}
