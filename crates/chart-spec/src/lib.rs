// File: crates/chart-spec/src/lib.rs
// Summary: Core library entry point; exports the typed chart schema and its JSON encoder.

pub mod encoding;
pub mod error;
pub mod types;
pub mod color;
pub mod font;
pub mod line;
pub mod ticks;
pub mod colorbar;
pub mod marker;
pub mod hover;
pub mod axis;
pub mod layout;
pub mod config;
pub mod traces;
pub mod figure;
pub mod theme;

pub use encoding::{Encode, FlagSet, Primitive};
pub use error::{ChartError, Result};
pub use types::{data, Datum, Dim, Margin};
pub use color::{Color, ColorScale, Palette};
pub use font::{Font, Title};
pub use line::Line;
pub use marker::Marker;
pub use colorbar::ColorBar;
pub use hover::{HoverInfo, HoverLabel};
pub use axis::{AutoRange, Axis, AxisType};
pub use layout::{Layout, Legend, Shape};
pub use config::Config;
pub use traces::{Bar, BoxPlot, Candle, Candlestick, CommonAttributes, Heatmap, Histogram, Ohlc, Pie, Scatter, Trace};
pub use figure::{Figure, WriteOptions};
pub use theme::Theme;
