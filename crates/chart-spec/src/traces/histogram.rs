// File: crates/chart-spec/src/traces/histogram.rs
// Summary: Histogram trace; binning and aggregation are done by the engine.

use serde::Serialize;

use super::TraceCommon;
use crate::encoding::primitive_enum;
use crate::marker::Marker;
use crate::types::{data, Datum, Orientation};

primitive_enum! {
    pub enum HistFunc {
        Count => "count",
        Sum => "sum",
        Avg => "avg",
        Min => "min",
        Max => "max",
    }
}

primitive_enum! {
    /// Normalization of bin heights. `Off` is the engine's empty string (raw counts).
    pub enum HistNorm {
        Off => "",
        Percent => "percent",
        Probability => "probability",
        Density => "density",
        ProbabilityDensity => "probability density",
    }
}

primitive_enum! {
    pub enum CumulativeDirection {
        Increasing => "increasing",
        Decreasing => "decreasing",
    }
}

primitive_enum! {
    pub enum CurrentBin {
        Include => "include",
        Exclude => "exclude",
        Half => "half",
    }
}

/// Explicit bin edges; unset members are chosen by the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Bins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Cumulative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<CumulativeDirection>,
    #[serde(rename = "currentbin", skip_serializing_if = "Option::is_none")]
    pub current_bin: Option<CurrentBin>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Histogram {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(rename = "histfunc", skip_serializing_if = "Option::is_none")]
    pub hist_func: Option<HistFunc>,
    #[serde(rename = "histnorm", skip_serializing_if = "Option::is_none")]
    pub hist_norm: Option<HistNorm>,
    #[serde(rename = "nbinsx", skip_serializing_if = "Option::is_none")]
    pub n_bins_x: Option<u32>,
    #[serde(rename = "nbinsy", skip_serializing_if = "Option::is_none")]
    pub n_bins_y: Option<u32>,
    #[serde(rename = "xbins", skip_serializing_if = "Option::is_none")]
    pub x_bins: Option<Bins>,
    #[serde(rename = "ybins", skip_serializing_if = "Option::is_none")]
    pub y_bins: Option<Bins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative: Option<Cumulative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Histogram {
    /// Distribution of `values` along x.
    pub fn new<T: Into<Datum>>(values: impl IntoIterator<Item = T>) -> Self {
        Self { x: Some(data(values)), ..Default::default() }
    }

    pub fn with_bins(mut self, n: u32) -> Self {
        self.n_bins_x = Some(n);
        self
    }

    pub fn with_norm(mut self, norm: HistNorm) -> Self {
        self.hist_norm = Some(norm);
        self
    }
}
