// File: crates/chart-spec/src/theme.rs
// Summary: Light/Dark theme presets applied onto a layout's color fields.

use crate::axis::Axis;
use crate::color::Color;
use crate::font::Font;
use crate::layout::Layout;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub crosshair: Color,
    pub line_stroke: Color,
    pub candle_up: Color,
    pub candle_down: Color,
    pub histogram: Color,
    pub baseline_fill: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            tick: Color::from_argb(255, 150, 150, 160),
            crosshair: Color::from_argb(255, 255, 230, 70),
            line_stroke: Color::from_argb(255, 64, 160, 255),
            candle_up: Color::from_argb(255, 40, 200, 120),
            candle_down: Color::from_argb(255, 220, 80, 80),
            histogram: Color::from_argb(255, 96, 156, 255),
            baseline_fill: Color::from_argb(96, 64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            tick: Color::from_argb(255, 100, 100, 110),
            crosshair: Color::from_argb(255, 30, 120, 240),
            line_stroke: Color::from_argb(255, 32, 120, 200),
            candle_up: Color::from_argb(255, 20, 160, 90),
            candle_down: Color::from_argb(255, 200, 60, 60),
            histogram: Color::from_argb(255, 40, 120, 200),
            baseline_fill: Color::from_argb(80, 32, 120, 200),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::Hex(0x002b36), // base03
            grid: Color::Hex(0x073642),       // base02
            axis_line: Color::Hex(0x93a1a1),  // base1
            axis_label: Color::Hex(0xeee8d5), // base2
            tick: Color::Hex(0x839496),       // base0
            crosshair: Color::Hex(0xb58900),  // yellow
            line_stroke: Color::Hex(0x268bd2), // blue
            candle_up: Color::Hex(0x2aa198),  // cyan
            candle_down: Color::Hex(0xdc322f), // red
            histogram: Color::Hex(0x268bd2),
            baseline_fill: Color::from_argb(96, 0x26, 0x8b, 0xd2),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::Hex(0xfdf6e3), // base3
            grid: Color::Hex(0xeee8d5),       // base2
            axis_line: Color::Hex(0x657b83),  // base00
            axis_label: Color::Hex(0x002b36), // base03
            tick: Color::Hex(0x586e75),       // base01
            crosshair: Color::Hex(0xcb4b16),  // orange
            line_stroke: Color::Hex(0x268bd2),
            candle_up: Color::Hex(0x2aa198),
            candle_down: Color::Hex(0xdc322f),
            histogram: Color::Hex(0x268bd2),
            baseline_fill: Color::from_argb(80, 0x26, 0x8b, 0xd2),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::Hex(0x000000),
            grid: Color::Hex(0x222222),
            axis_line: Color::Hex(0xffffff),
            axis_label: Color::Hex(0xffffff),
            tick: Color::Hex(0xcccccc),
            crosshair: Color::Hex(0xffff00),
            line_stroke: Color::Hex(0x00ffff),
            candle_up: Color::Hex(0x00ff00),
            candle_down: Color::Hex(0xff0000),
            histogram: Color::Hex(0x00aaff),
            baseline_fill: Color::from_argb(120, 0x00, 0xaa, 0xff),
        }
    }

    /// Series colors cycled by the engine for traces without an explicit color.
    pub fn colorway(&self) -> Vec<Color> {
        vec![self.line_stroke.clone(), self.candle_up.clone(), self.candle_down.clone(), self.histogram.clone()]
    }

    /// Overwrite the color fields of `layout` (and of both primary axes) with this theme.
    pub fn apply(&self, mut layout: Layout) -> Layout {
        layout.paper_bg_color = Some(self.background.clone());
        layout.plot_bg_color = Some(self.background.clone());
        let font = layout.font.take().unwrap_or_default();
        layout.font = Some(Font { color: Some(self.axis_label.clone()), ..font });
        layout.colorway = Some(self.colorway());
        layout.x_axis = Some(self.style_axis(layout.x_axis.take()));
        layout.y_axis = Some(self.style_axis(layout.y_axis.take()));
        layout
    }

    fn style_axis(&self, axis: Option<Axis>) -> Axis {
        Axis {
            grid_color: Some(self.grid.clone()),
            line_color: Some(self.axis_line.clone()),
            tick_color: Some(self.tick.clone()),
            zero_line_color: Some(self.axis_line.clone()),
            spike_color: Some(self.crosshair.clone()),
            ..axis.unwrap_or_default()
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
