// File: crates/chart-spec/src/traces/heatmap.rs
// Summary: Heatmap trace over a row-major `z` matrix.

use serde::Serialize;

use super::TraceCommon;
use crate::color::ColorScale;
use crate::colorbar::ColorBar;
use crate::encoding::primitive_enum;
use crate::types::Datum;

primitive_enum! {
    /// Cell smoothing; `Off` is a boolean on the wire.
    pub enum ZSmooth {
        Fast => "fast",
        Best => "best",
        Off => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Heatmap {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Datum>>,
    /// `z[row][column]`; rows follow `y`, columns follow `x`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transpose: Option<bool>,
    #[serde(rename = "colorscale", skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(rename = "reversescale", skip_serializing_if = "Option::is_none")]
    pub reverse_scale: Option<bool>,
    #[serde(rename = "showscale", skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
    #[serde(rename = "colorbar", skip_serializing_if = "Option::is_none")]
    pub color_bar: Option<ColorBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zauto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmax: Option<f64>,
    #[serde(rename = "zsmooth", skip_serializing_if = "Option::is_none")]
    pub z_smooth: Option<ZSmooth>,
    #[serde(rename = "hoverongaps", skip_serializing_if = "Option::is_none")]
    pub hover_on_gaps: Option<bool>,
    #[serde(rename = "xgap", skip_serializing_if = "Option::is_none")]
    pub x_gap: Option<f64>,
    #[serde(rename = "ygap", skip_serializing_if = "Option::is_none")]
    pub y_gap: Option<f64>,
}

impl Heatmap {
    pub fn new(z: Vec<Vec<f64>>) -> Self {
        Self { z: Some(z), ..Default::default() }
    }

    pub fn with_color_scale(mut self, scale: impl Into<ColorScale>) -> Self {
        self.color_scale = Some(scale.into());
        self
    }
}
