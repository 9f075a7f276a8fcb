// File: crates/chart-spec/src/traces/mod.rs
// Summary: Trace enum (tagged by `type` on the wire) and the attributes every trace shares.

use serde::Serialize;

use crate::encoding::{primitive_enum, unset_flags};
use crate::hover::{HoverInfo, HoverLabel};
use crate::types::Dim;

pub mod bar;
pub mod box_plot;
pub mod financial;
pub mod heatmap;
pub mod histogram;
pub mod pie;
pub mod scatter;

pub use bar::Bar;
pub use box_plot::BoxPlot;
pub use financial::{Candle, Candlestick, Ohlc};
pub use heatmap::Heatmap;
pub use histogram::Histogram;
pub use pie::Pie;
pub use scatter::Scatter;

primitive_enum! {
    /// Trace visibility; `LegendOnly` hides the trace but keeps its legend entry.
    pub enum Visible {
        On => true,
        Off => false,
        LegendOnly => "legendonly",
    }
}

/// Attributes shared by every trace kind, flattened into the trace object.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TraceCommon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visible>,
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(rename = "legendgroup", skip_serializing_if = "Option::is_none")]
    pub legend_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Dim<String>>,
    #[serde(rename = "hoverinfo", skip_serializing_if = "unset_flags")]
    pub hover_info: Option<HoverInfo>,
    #[serde(rename = "hovertemplate", skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<String>,
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
    /// Axis ids (`"x"`, `"x2"`) for cartesian traces.
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Builder methods over [`TraceCommon`], available on every trace kind.
pub trait CommonAttributes: Sized {
    fn common(&self) -> &TraceCommon;
    fn common_mut(&mut self) -> &mut TraceCommon;

    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.common_mut().name = Some(name.into());
        self
    }

    fn with_visible(mut self, visible: Visible) -> Self {
        self.common_mut().visible = Some(visible);
        self
    }

    fn with_show_legend(mut self, show: bool) -> Self {
        self.common_mut().show_legend = Some(show);
        self
    }

    fn with_legend_group(mut self, group: impl Into<String>) -> Self {
        self.common_mut().legend_group = Some(group.into());
        self
    }

    fn with_opacity(mut self, opacity: f64) -> Self {
        self.common_mut().opacity = Some(opacity);
        self
    }

    fn with_text(mut self, text: Vec<String>) -> Self {
        self.common_mut().text = Some(Dim::Vector(text));
        self
    }

    fn with_hover_info(mut self, info: HoverInfo) -> Self {
        self.common_mut().hover_info = Some(info);
        self
    }

    fn with_hover_template(mut self, template: impl Into<String>) -> Self {
        self.common_mut().hover_template = Some(template.into());
        self
    }

    /// Place the trace on secondary axes, e.g. `("x", "y2")`.
    fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        let c = self.common_mut();
        c.x_axis = Some(x.into());
        c.y_axis = Some(y.into());
        self
    }
}

macro_rules! impl_common_attributes {
    ($($t:ty),+ $(,)?) => {
        $(
            impl CommonAttributes for $t {
                fn common(&self) -> &TraceCommon { &self.common }
                fn common_mut(&mut self) -> &mut TraceCommon { &mut self.common }
            }
        )+
    };
}

impl_common_attributes!(Scatter, Bar, Histogram, Candlestick, Ohlc, Heatmap, BoxPlot, Pie);

/// One entry of a figure's `data` array.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Trace {
    #[serde(rename = "scatter")]
    Scatter(Scatter),
    #[serde(rename = "bar")]
    Bar(Bar),
    #[serde(rename = "histogram")]
    Histogram(Histogram),
    #[serde(rename = "candlestick")]
    Candlestick(Candlestick),
    #[serde(rename = "ohlc")]
    Ohlc(Ohlc),
    #[serde(rename = "heatmap")]
    Heatmap(Heatmap),
    #[serde(rename = "box")]
    BoxPlot(BoxPlot),
    #[serde(rename = "pie")]
    Pie(Pie),
}

impl Trace {
    /// Wire value of the `type` key.
    pub fn kind(&self) -> &'static str {
        match self {
            Trace::Scatter(_) => "scatter",
            Trace::Bar(_) => "bar",
            Trace::Histogram(_) => "histogram",
            Trace::Candlestick(_) => "candlestick",
            Trace::Ohlc(_) => "ohlc",
            Trace::Heatmap(_) => "heatmap",
            Trace::BoxPlot(_) => "box",
            Trace::Pie(_) => "pie",
        }
    }

    pub fn common(&self) -> &TraceCommon {
        match self {
            Trace::Scatter(t) => t.common(),
            Trace::Bar(t) => t.common(),
            Trace::Histogram(t) => t.common(),
            Trace::Candlestick(t) => t.common(),
            Trace::Ohlc(t) => t.common(),
            Trace::Heatmap(t) => t.common(),
            Trace::BoxPlot(t) => t.common(),
            Trace::Pie(t) => t.common(),
        }
    }

    pub fn name(&self) -> Option<&str> { self.common().name.as_deref() }
}

macro_rules! impl_into_trace {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Trace {
                fn from(t: $variant) -> Self { Trace::$variant(t) }
            }
        )+
    };
}

impl_into_trace!(Scatter, Bar, Histogram, Candlestick, Ohlc, Heatmap, BoxPlot, Pie);
