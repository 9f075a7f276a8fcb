// File: crates/chart-spec/src/hover.rs
// Summary: Hover-info flag set and hover label styling.

use serde::Serialize;

use crate::color::Color;
use crate::encoding::{flag_set, primitive_enum};
use crate::font::Font;

flag_set! {
    /// Trace fields shown on hover. `ALL`, `NONE` and `SKIP` are standalone
    /// values on the engine side but share the catalogue here.
    pub struct HoverInfo: u16 {
        X = 0 => "x",
        Y = 1 => "y",
        Z = 2 => "z",
        TEXT = 3 => "text",
        NAME = 4 => "name",
        ALL = 5 => "all",
        NONE = 6 => "none",
        SKIP = 7 => "skip",
    }
}

primitive_enum! {
    pub enum HoverAlign {
        Left => "left",
        Right => "right",
        Auto => "auto",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HoverLabel {
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
    #[serde(rename = "bordercolor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<HoverAlign>,
    /// `-1` shows the whole trace name.
    #[serde(rename = "namelength", skip_serializing_if = "Option::is_none")]
    pub name_length: Option<i32>,
}
