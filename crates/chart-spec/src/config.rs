// File: crates/chart-spec/src/config.rs
// Summary: Engine-level plot configuration (mode bar, zoom, export). Wire keys here are camelCase.

use serde::{Serialize, Serializer};

use crate::encoding::{empty_list, flag_set, primitive_enum, FlagSet};

primitive_enum! {
    /// Mode bar visibility: always, never, or only while hovering.
    pub enum DisplayModeBar {
        Always => true,
        Never => false,
        Hover => "hover",
    }
}

flag_set! {
    /// Subplot kinds that react to scroll zoom.
    pub struct ScrollZoomTargets: u8 {
        CARTESIAN = 0 => "cartesian",
        GL3D = 1 => "gl3d",
        GEO = 2 => "geo",
        MAPBOX = 3 => "mapbox",
    }
}

/// Scroll zoom switch: a boolean, or the set of subplot kinds it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollZoom {
    Enabled,
    Disabled,
    Only(ScrollZoomTargets),
}

impl Serialize for ScrollZoom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScrollZoom::Enabled => serializer.serialize_bool(true),
            ScrollZoom::Disabled => serializer.serialize_bool(false),
            // An empty target set means nothing zooms.
            ScrollZoom::Only(t) if t.is_empty() => serializer.serialize_bool(false),
            ScrollZoom::Only(t) => serializer.serialize_str(&t.encode()),
        }
    }
}

primitive_enum! {
    pub enum ModeBarButton {
        Zoom2d => "zoom2d",
        Pan2d => "pan2d",
        Select2d => "select2d",
        Lasso2d => "lasso2d",
        ZoomIn2d => "zoomIn2d",
        ZoomOut2d => "zoomOut2d",
        AutoScale2d => "autoScale2d",
        ResetScale2d => "resetScale2d",
        HoverClosestCartesian => "hoverClosestCartesian",
        HoverCompareCartesian => "hoverCompareCartesian",
        ToggleSpikelines => "toggleSpikelines",
        ToImage => "toImage",
    }
}

primitive_enum! {
    pub enum ImageFormat {
        Png => "png",
        Svg => "svg",
        Jpeg => "jpeg",
        Webp => "webp",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImageButtonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(rename = "staticPlot", skip_serializing_if = "Option::is_none")]
    pub static_plot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(rename = "displayModeBar", skip_serializing_if = "Option::is_none")]
    pub display_mode_bar: Option<DisplayModeBar>,
    #[serde(rename = "scrollZoom", skip_serializing_if = "Option::is_none")]
    pub scroll_zoom: Option<ScrollZoom>,
    #[serde(rename = "displaylogo", skip_serializing_if = "Option::is_none")]
    pub display_logo: Option<bool>,
    #[serde(rename = "modeBarButtonsToRemove", skip_serializing_if = "empty_list")]
    pub mode_bar_buttons_to_remove: Option<Vec<ModeBarButton>>,
    #[serde(rename = "toImageButtonOptions", skip_serializing_if = "Option::is_none")]
    pub to_image_button_options: Option<ImageButtonOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(rename = "typesetMath", skip_serializing_if = "Option::is_none")]
    pub typeset_math: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scroll_zoom_is_bool_or_flag_string() {
        assert_eq!(serde_json::to_value(ScrollZoom::Enabled).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(ScrollZoom::Disabled).unwrap(), json!(false));
        let only = ScrollZoom::Only(ScrollZoomTargets::GEO | ScrollZoomTargets::CARTESIAN);
        assert_eq!(serde_json::to_value(only).unwrap(), json!("cartesian+geo"));
        let none = ScrollZoom::Only(ScrollZoomTargets::empty());
        assert_eq!(serde_json::to_value(none).unwrap(), json!(false));
    }

    #[test]
    fn camel_case_keys() {
        let cfg = Config {
            static_plot: Some(true),
            display_mode_bar: Some(DisplayModeBar::Hover),
            mode_bar_buttons_to_remove: Some(vec![ModeBarButton::Lasso2d, ModeBarButton::Select2d]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({
                "staticPlot": true,
                "displayModeBar": "hover",
                "modeBarButtonsToRemove": ["lasso2d", "select2d"],
            })
        );
    }
}
