// File: crates/chart-spec/src/marker.rs
// Summary: Marker object shared by point-, bar- and box-style traces.

use serde::Serialize;

use crate::color::{Color, ColorScale};
use crate::colorbar::ColorBar;
use crate::encoding::primitive_enum;
use crate::line::Line;
use crate::types::Dim;

primitive_enum! {
    pub enum MarkerSymbol {
        Circle => "circle",
        CircleOpen => "circle-open",
        Square => "square",
        SquareOpen => "square-open",
        Diamond => "diamond",
        DiamondOpen => "diamond-open",
        Cross => "cross",
        X => "x",
        TriangleUp => "triangle-up",
        TriangleDown => "triangle-down",
        TriangleLeft => "triangle-left",
        TriangleRight => "triangle-right",
        Pentagon => "pentagon",
        Hexagon => "hexagon",
        Star => "star",
        LineNs => "line-ns",
        LineEw => "line-ew",
    }
}

primitive_enum! {
    /// How numeric `size` values scale into marker pixels.
    pub enum SizeMode {
        Diameter => "diameter",
        Area => "area",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Dim<MarkerSymbol>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Dim<f64>>,
    #[serde(rename = "sizemode", skip_serializing_if = "Option::is_none")]
    pub size_mode: Option<SizeMode>,
    #[serde(rename = "sizeref", skip_serializing_if = "Option::is_none")]
    pub size_ref: Option<f64>,
    #[serde(rename = "sizemin", skip_serializing_if = "Option::is_none")]
    pub size_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Dim<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Dim<f64>>,
    #[serde(rename = "colorscale", skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cauto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
    #[serde(rename = "reversescale", skip_serializing_if = "Option::is_none")]
    pub reverse_scale: Option<bool>,
    #[serde(rename = "showscale", skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(rename = "colorbar", skip_serializing_if = "Option::is_none")]
    pub color_bar: Option<ColorBar>,
}

impl Marker {
    pub fn new() -> Self { Self::default() }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(Dim::Scalar(color.into()));
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.color = Some(Dim::Vector(colors));
        self
    }

    pub fn with_size(mut self, size: impl Into<Dim<f64>>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_symbol(mut self, symbol: MarkerSymbol) -> Self {
        self.symbol = Some(Dim::Scalar(symbol));
        self
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }
}
