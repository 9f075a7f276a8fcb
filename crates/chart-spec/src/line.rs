// File: crates/chart-spec/src/line.rs
// Summary: Line style object shared by traces, marker outlines and shapes.

use serde::Serialize;

use crate::color::Color;
use crate::encoding::primitive_enum;

primitive_enum! {
    pub enum DashType {
        Solid => "solid",
        Dot => "dot",
        Dash => "dash",
        LongDash => "longdash",
        DashDot => "dashdot",
        LongDashDot => "longdashdot",
    }
}

primitive_enum! {
    /// Interpolation between consecutive points.
    pub enum LineShape {
        Linear => "linear",
        Spline => "spline",
        Hv => "hv",
        Vh => "vh",
        Hvh => "hvh",
        Vhv => "vhv",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<LineShape>,
    /// Only meaningful with `LineShape::Spline`; range `0.0..=1.3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify: Option<bool>,
}

impl Line {
    pub fn new(color: impl Into<Color>, width: f64) -> Self {
        Self { color: Some(color.into()), width: Some(width), ..Default::default() }
    }

    pub fn with_dash(mut self, dash: DashType) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn with_shape(mut self, shape: LineShape) -> Self {
        self.shape = Some(shape);
        self
    }
}
