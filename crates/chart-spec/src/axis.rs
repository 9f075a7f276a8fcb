// File: crates/chart-spec/src/axis.rs
// Summary: Cartesian axis model with labels, ranges and tick/spike configuration.

use serde::Serialize;

use crate::color::Color;
use crate::encoding::{flag_set, primitive_enum, unset_flags};
use crate::font::{Font, Title};
use crate::ticks::{DTick, ExponentFormat, ShowTickAffix, TickMode, Ticks};
use crate::types::Datum;

primitive_enum! {
    /// Axis scale type. `Infer` (`"-"`) lets the engine guess from the data.
    pub enum AxisType {
        Infer => "-",
        Linear => "linear",
        Log => "log",
        Date => "date",
        Category => "category",
        MultiCategory => "multicategory",
    }
}

primitive_enum! {
    /// Autorange switch: booleans for on/off, a string for the reversed mode.
    pub enum AutoRange {
        On => true,
        Off => false,
        Reversed => "reversed",
    }
}

primitive_enum! {
    /// Whether the axis line and ticks are mirrored on the opposite side.
    pub enum Mirror {
        On => true,
        Off => false,
        Ticks => "ticks",
        All => "all",
        AllTicks => "allticks",
    }
}

primitive_enum! {
    pub enum RangeMode {
        Normal => "normal",
        ToZero => "tozero",
        NonNegative => "nonnegative",
    }
}

primitive_enum! {
    pub enum AxisSide {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

primitive_enum! {
    pub enum CategoryOrder {
        Trace => "trace",
        CategoryAscending => "category ascending",
        CategoryDescending => "category descending",
        Array => "array",
        TotalAscending => "total ascending",
        TotalDescending => "total descending",
    }
}

flag_set! {
    /// Spike line drawing style.
    pub struct SpikeMode: u8 {
        TO_AXIS = 0 => "toaxis",
        ACROSS = 1 => "across",
        MARKER = 2 => "marker",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RangeSlider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Fraction of the plot height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<Datum>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(rename = "autorange", skip_serializing_if = "Option::is_none")]
    pub auto_range: Option<AutoRange>,
    #[serde(rename = "rangemode", skip_serializing_if = "Option::is_none")]
    pub range_mode: Option<RangeMode>,
    /// For log axes the endpoints are exponents (log10 of the data range).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<Datum>>,
    #[serde(rename = "fixedrange", skip_serializing_if = "Option::is_none")]
    pub fixed_range: Option<bool>,
    #[serde(rename = "scaleanchor", skip_serializing_if = "Option::is_none")]
    pub scale_anchor: Option<String>,
    #[serde(rename = "scaleratio", skip_serializing_if = "Option::is_none")]
    pub scale_ratio: Option<f64>,

    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    pub tick_mode: Option<TickMode>,
    #[serde(rename = "nticks", skip_serializing_if = "Option::is_none")]
    pub n_ticks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<DTick>,
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    pub tick_vals: Option<Vec<Datum>>,
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<Mirror>,
    #[serde(rename = "ticklen", skip_serializing_if = "Option::is_none")]
    pub tick_len: Option<f64>,
    #[serde(rename = "tickwidth", skip_serializing_if = "Option::is_none")]
    pub tick_width: Option<f64>,
    #[serde(rename = "tickcolor", skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<Color>,
    #[serde(rename = "showticklabels", skip_serializing_if = "Option::is_none")]
    pub show_tick_labels: Option<bool>,
    #[serde(rename = "tickfont", skip_serializing_if = "Option::is_none")]
    pub tick_font: Option<Font>,
    #[serde(rename = "tickangle", skip_serializing_if = "Option::is_none")]
    pub tick_angle: Option<f64>,
    #[serde(rename = "tickformat", skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
    #[serde(rename = "tickprefix", skip_serializing_if = "Option::is_none")]
    pub tick_prefix: Option<String>,
    #[serde(rename = "ticksuffix", skip_serializing_if = "Option::is_none")]
    pub tick_suffix: Option<String>,
    #[serde(rename = "exponentformat", skip_serializing_if = "Option::is_none")]
    pub exponent_format: Option<ExponentFormat>,
    #[serde(rename = "showexponent", skip_serializing_if = "Option::is_none")]
    pub show_exponent: Option<ShowTickAffix>,

    #[serde(rename = "showspikes", skip_serializing_if = "Option::is_none")]
    pub show_spikes: Option<bool>,
    #[serde(rename = "spikemode", skip_serializing_if = "unset_flags")]
    pub spike_mode: Option<SpikeMode>,
    #[serde(rename = "spikecolor", skip_serializing_if = "Option::is_none")]
    pub spike_color: Option<Color>,
    #[serde(rename = "spikethickness", skip_serializing_if = "Option::is_none")]
    pub spike_thickness: Option<f64>,

    #[serde(rename = "showline", skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(rename = "linecolor", skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(rename = "linewidth", skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(rename = "showgrid", skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(rename = "gridcolor", skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<Color>,
    #[serde(rename = "gridwidth", skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<f64>,
    #[serde(rename = "zeroline", skip_serializing_if = "Option::is_none")]
    pub zero_line: Option<bool>,
    #[serde(rename = "zerolinecolor", skip_serializing_if = "Option::is_none")]
    pub zero_line_color: Option<Color>,
    #[serde(rename = "zerolinewidth", skip_serializing_if = "Option::is_none")]
    pub zero_line_width: Option<f64>,

    /// Axis id this one is anchored to (`"x"`, `"y2"`, `"free"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<AxisSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(rename = "categoryorder", skip_serializing_if = "Option::is_none")]
    pub category_order: Option<CategoryOrder>,
    #[serde(rename = "categoryarray", skip_serializing_if = "Option::is_none")]
    pub category_array: Option<Vec<Datum>>,
    #[serde(rename = "rangeslider", skip_serializing_if = "Option::is_none")]
    pub range_slider: Option<RangeSlider>,
}

impl Axis {
    /// Linear axis with a title and a fixed `[min, max]` range.
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            title: Some(Title::new(label)),
            axis_type: Some(AxisType::Linear),
            range: Some(vec![Datum::Float(min), Datum::Float(max)]),
            ..Default::default()
        }
    }

    /// Log10 axis over a data range; non-positive or non-finite bounds are clamped.
    pub fn log(label: impl Into<String>, min: f64, max: f64) -> Self {
        let eps = 1e-12;
        let lo = if !min.is_finite() || min <= eps { eps } else { min };
        let hi = if !max.is_finite() || max <= lo { lo * 10.0 } else { max };
        Self {
            title: Some(Title::new(label)),
            axis_type: Some(AxisType::Log),
            range: Some(vec![Datum::Float(lo.log10()), Datum::Float(hi.log10())]),
            ..Default::default()
        }
    }

    /// Date axis with automatic range.
    pub fn date(label: impl Into<String>) -> Self {
        Self {
            title: Some(Title::new(label)),
            axis_type: Some(AxisType::Date),
            auto_range: Some(AutoRange::On),
            ..Default::default()
        }
    }

    pub fn with_auto_range(mut self, auto_range: AutoRange) -> Self {
        self.auto_range = Some(auto_range);
        self
    }

    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = Some(show);
        self
    }
}
