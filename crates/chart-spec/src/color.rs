// File: crates/chart-spec/src/color.rs
// Summary: CSS-style color values and color scales as understood by the engine.

use serde::{Serialize, Serializer};

use crate::encoding::primitive_enum;

/// A color, serialized as a CSS color string.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// `#rrggbb`.
    Hex(u32),
    Rgb(u8, u8, u8),
    /// Alpha in `0.0..=1.0`.
    Rgba(u8, u8, u8, f64),
    /// Any string the engine accepts verbatim (`"red"`, `"#abc"`, `"hsl(...)"`).
    Css(String),
}

impl Color {
    /// Build from 8-bit ARGB components; fully opaque colors become plain `rgb(...)`.
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        if a == 255 {
            Color::Rgb(r, g, b)
        } else {
            // Two decimals is what the engine round-trips.
            let alpha = (a as f64 / 255.0 * 100.0).round() / 100.0;
            Color::Rgba(r, g, b, alpha)
        }
    }

    pub fn named(name: impl Into<String>) -> Self { Color::Css(name.into()) }

    pub fn to_css(&self) -> String {
        match self {
            Color::Hex(v) => format!("#{:06x}", v & 0x00ff_ffff),
            Color::Rgb(r, g, b) => format!("rgb({r}, {g}, {b})"),
            Color::Rgba(r, g, b, a) => format!("rgba({r}, {g}, {b}, {a})"),
            Color::Css(s) => s.clone(),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self { Color::Css(s.to_owned()) }
}

impl From<String> for Color {
    fn from(s: String) -> Self { Color::Css(s) }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Color::Css(s) => serializer.serialize_str(s),
            other => serializer.serialize_str(&other.to_css()),
        }
    }
}

primitive_enum! {
    /// Built-in color scales of the engine.
    pub enum Palette {
        Blackbody => "Blackbody",
        Bluered => "Bluered",
        Blues => "Blues",
        Cividis => "Cividis",
        Earth => "Earth",
        Electric => "Electric",
        Greens => "Greens",
        Greys => "Greys",
        Hot => "Hot",
        Jet => "Jet",
        Picnic => "Picnic",
        Portland => "Portland",
        Rainbow => "Rainbow",
        RdBu => "RdBu",
        Reds => "Reds",
        Viridis => "Viridis",
        YlGnBu => "YlGnBu",
        YlOrRd => "YlOrRd",
    }
}

/// Either a named palette or explicit `(stop, color)` pairs with stops in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorScale {
    Palette(Palette),
    Stops(Vec<(f64, Color)>),
}

impl From<Palette> for ColorScale {
    fn from(p: Palette) -> Self { ColorScale::Palette(p) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn css_forms() {
        assert_eq!(Color::Hex(0x1f77b4).to_css(), "#1f77b4");
        assert_eq!(Color::from_argb(255, 18, 18, 20).to_css(), "rgb(18, 18, 20)");
        assert_eq!(Color::from_argb(96, 64, 160, 255), Color::Rgba(64, 160, 255, 0.38));
        assert_eq!(serde_json::to_value(Color::from("red")).unwrap(), json!("red"));
    }

    #[test]
    fn scales_serialize_as_name_or_pairs() {
        assert_eq!(serde_json::to_value(ColorScale::from(Palette::Viridis)).unwrap(), json!("Viridis"));
        let stops = ColorScale::Stops(vec![(0.0, Color::from("white")), (1.0, Color::Rgb(0, 0, 0))]);
        assert_eq!(serde_json::to_value(stops).unwrap(), json!([[0.0, "white"], [1.0, "rgb(0, 0, 0)"]]));
    }
}
