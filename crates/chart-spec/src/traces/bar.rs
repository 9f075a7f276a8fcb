// File: crates/chart-spec/src/traces/bar.rs
// Summary: Bar trace; bars grow from `base` (zero by default) along the orientation axis.

use serde::Serialize;

use super::TraceCommon;
use crate::encoding::primitive_enum;
use crate::font::Font;
use crate::marker::Marker;
use crate::types::{data, Datum, Dim, Orientation};

primitive_enum! {
    pub enum BarTextPosition {
        Inside => "inside",
        Outside => "outside",
        Auto => "auto",
        None => "none",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Bar {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Dim<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dim<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Dim<f64>>,
    #[serde(rename = "offsetgroup", skip_serializing_if = "Option::is_none")]
    pub offset_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    pub text_position: Option<BarTextPosition>,
    #[serde(rename = "textfont", skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Font>,
}

impl Bar {
    pub fn new<X, Y>(x: impl IntoIterator<Item = X>, y: impl IntoIterator<Item = Y>) -> Self
    where
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        Self { x: Some(data(x)), y: Some(data(y)), ..Default::default() }
    }

    /// Bars measured from `baseline` instead of zero.
    pub fn with_base(mut self, baseline: f64) -> Self {
        self.base = Some(Dim::Scalar(baseline));
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Some(Orientation::Horizontal);
        self
    }
}
