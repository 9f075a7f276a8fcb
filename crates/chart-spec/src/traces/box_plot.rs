// File: crates/chart-spec/src/traces/box_plot.rs
// Summary: Box trace (`type: "box"`); quartiles are computed by the engine.

use serde::Serialize;

use super::TraceCommon;
use crate::color::Color;
use crate::encoding::primitive_enum;
use crate::line::Line;
use crate::marker::Marker;
use crate::types::{data, Datum, Orientation};

primitive_enum! {
    /// Which sample points are drawn next to the box; `Off` is a boolean on the wire.
    pub enum BoxPoints {
        All => "all",
        Outliers => "outliers",
        SuspectedOutliers => "suspectedoutliers",
        Off => false,
    }
}

primitive_enum! {
    /// Mean marker: `On` draws the mean, `Sd` adds the standard deviation.
    pub enum BoxMean {
        On => true,
        Sd => "sd",
        Off => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoxPlot {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(rename = "boxpoints", skip_serializing_if = "Option::is_none")]
    pub box_points: Option<BoxPoints>,
    #[serde(rename = "boxmean", skip_serializing_if = "Option::is_none")]
    pub box_mean: Option<BoxMean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notched: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,
    #[serde(rename = "pointpos", skip_serializing_if = "Option::is_none")]
    pub point_pos: Option<f64>,
    #[serde(rename = "whiskerwidth", skip_serializing_if = "Option::is_none")]
    pub whisker_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(rename = "fillcolor", skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
}

impl BoxPlot {
    /// Vertical box over `values`.
    pub fn new<T: Into<Datum>>(values: impl IntoIterator<Item = T>) -> Self {
        Self { y: Some(data(values)), ..Default::default() }
    }

    pub fn with_points(mut self, points: BoxPoints) -> Self {
        self.box_points = Some(points);
        self
    }

    pub fn with_mean(mut self, mean: BoxMean) -> Self {
        self.box_mean = Some(mean);
        self
    }
}
