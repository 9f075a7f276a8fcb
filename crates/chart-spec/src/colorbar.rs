// File: crates/chart-spec/src/colorbar.rs
// Summary: Color bar object attached to color-mapped markers and heatmaps.

use serde::Serialize;

use crate::color::Color;
use crate::encoding::primitive_enum;
use crate::font::{Font, Title};
use crate::ticks::{DTick, ExponentFormat, ShowTickAffix, TickMode, Ticks};
use crate::types::{Datum, XAnchor, YAnchor};

primitive_enum! {
    /// Unit of a color bar's `thickness` / `len`.
    pub enum SizeUnit {
        Fraction => "fraction",
        Pixels => "pixels",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ColorBar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(rename = "thicknessmode", skip_serializing_if = "Option::is_none")]
    pub thickness_mode: Option<SizeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<f64>,
    #[serde(rename = "lenmode", skip_serializing_if = "Option::is_none")]
    pub len_mode: Option<SizeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(rename = "xanchor", skip_serializing_if = "Option::is_none")]
    pub x_anchor: Option<XAnchor>,
    #[serde(rename = "xpad", skip_serializing_if = "Option::is_none")]
    pub x_pad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "yanchor", skip_serializing_if = "Option::is_none")]
    pub y_anchor: Option<YAnchor>,
    #[serde(rename = "ypad", skip_serializing_if = "Option::is_none")]
    pub y_pad: Option<f64>,
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
    #[serde(rename = "outlinecolor", skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<Color>,
    #[serde(rename = "outlinewidth", skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    pub tick_mode: Option<TickMode>,
    #[serde(rename = "nticks", skip_serializing_if = "Option::is_none")]
    pub n_ticks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<DTick>,
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    pub tick_vals: Option<Vec<f64>>,
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(rename = "ticklen", skip_serializing_if = "Option::is_none")]
    pub tick_len: Option<f64>,
    #[serde(rename = "tickfont", skip_serializing_if = "Option::is_none")]
    pub tick_font: Option<Font>,
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
}
