// File: crates/chart-spec/src/font.rs
// Summary: Font and title objects shared by layout, axes, legends and traces.

use serde::Serialize;

use crate::color::Color;
use crate::types::{Pad, XAnchor, YAnchor};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Font {
    pub fn sized(size: f64) -> Self {
        Self { size: Some(size), ..Default::default() }
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

/// Title block; always emitted in object form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "xanchor", skip_serializing_if = "Option::is_none")]
    pub x_anchor: Option<XAnchor>,
    #[serde(rename = "yanchor", skip_serializing_if = "Option::is_none")]
    pub y_anchor: Option<YAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<Pad>,
    /// Distance from the axis, for axis titles only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standoff: Option<f64>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Default::default() }
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self { Title::new(text) }
}

impl From<String> for Title {
    fn from(text: String) -> Self { Title::new(text) }
}
