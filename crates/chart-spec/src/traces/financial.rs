// File: crates/chart-spec/src/traces/financial.rs
// Summary: OHLC data model and the candlestick / OHLC-bar traces built from it.

use serde::Serialize;

use super::TraceCommon;
use crate::color::Color;
use crate::error::ChartError;
use crate::line::Line;
use crate::types::Datum;

#[derive(Clone, Debug, PartialEq)]
pub struct Candle {
    pub t: Datum, // time or index (displayed on X)
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

impl Candle {
    /// Construct a candle enforcing OHLC invariants:
    /// all prices finite, l <= min(o,c), h >= max(o,c), and l <= h.
    pub fn try_new(t: impl Into<Datum>, o: f64, h: f64, l: f64, c: f64) -> Result<Self, ChartError> {
        if ![o, h, l, c].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidCandle("non-finite price"));
        }
        let lo = o.min(c);
        let hi = o.max(c);
        if l > lo { return Err(ChartError::InvalidCandle("low above min(open,close)")); }
        if h < hi { return Err(ChartError::InvalidCandle("high below max(open,close)")); }
        if l > h { return Err(ChartError::InvalidCandle("low above high")); }
        Ok(Self { t: t.into(), o, h, l, c })
    }
}

/// Columnar OHLC arrays as the engine expects them.
struct Columns {
    x: Vec<Datum>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
}

impl Columns {
    fn from_candles(candles: &[Candle]) -> Self {
        let n = candles.len();
        let mut cols = Columns {
            x: Vec::with_capacity(n),
            open: Vec::with_capacity(n),
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
        };
        for k in candles {
            cols.x.push(k.t.clone());
            cols.open.push(k.o);
            cols.high.push(k.h);
            cols.low.push(k.l);
            cols.close.push(k.c);
        }
        cols
    }
}

/// Styling for rising or falling candles.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Direction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(rename = "fillcolor", skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
}

impl Direction {
    pub fn colored(color: impl Into<Color>) -> Self {
        let color = color.into();
        Self {
            line: Some(Line { color: Some(color.clone()), ..Default::default() }),
            fill_color: Some(color),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Candlestick {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increasing: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decreasing: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    /// Whisker width as a fraction of the box width.
    #[serde(rename = "whiskerwidth", skip_serializing_if = "Option::is_none")]
    pub whisker_width: Option<f64>,
}

impl Candlestick {
    pub fn from_candles(candles: &[Candle]) -> Self {
        let cols = Columns::from_candles(candles);
        Self {
            x: Some(cols.x),
            open: Some(cols.open),
            high: Some(cols.high),
            low: Some(cols.low),
            close: Some(cols.close),
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, up: impl Into<Color>, down: impl Into<Color>) -> Self {
        self.increasing = Some(Direction::colored(up));
        self.decreasing = Some(Direction::colored(down));
        self
    }
}

/// OHLC bars: open/close ticks on a high-low stem, no filled body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Ohlc {
    #[serde(flatten)]
    pub common: TraceCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increasing: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decreasing: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    /// Tick width as a fraction of the minimal x interval, `0.0..=0.5`.
    #[serde(rename = "tickwidth", skip_serializing_if = "Option::is_none")]
    pub tick_width: Option<f64>,
}

impl Ohlc {
    pub fn from_candles(candles: &[Candle]) -> Self {
        let cols = Columns::from_candles(candles);
        Self {
            x: Some(cols.x),
            open: Some(cols.open),
            high: Some(cols.high),
            low: Some(cols.low),
            close: Some(cols.close),
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, up: impl Into<Color>, down: impl Into<Color>) -> Self {
        self.increasing = Some(Direction { line: Some(Line { color: Some(up.into()), ..Default::default() }), fill_color: None });
        self.decreasing = Some(Direction { line: Some(Line { color: Some(down.into()), ..Default::default() }), fill_color: None });
        self
    }
}
