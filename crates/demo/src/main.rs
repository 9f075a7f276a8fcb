// File: crates/demo/src/main.rs
// Summary: Demo loads OHLC CSV and emits one figure JSON per trace kind (candles, bars, deltas, histogram, close).

use anyhow::{Context, Result};
use chart_spec::layout::HoverMode;
use chart_spec::traces::scatter::ScatterMode;
use chart_spec::{
    theme, Axis, Bar, Candle, Candlestick, CommonAttributes, Figure, Histogram, Layout, Line, Marker, Ohlc, Scatter,
    Shape, Theme, Trace, WriteOptions,
};
use chart_spec::types::Datum;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept path from CLI or fall back to sample filename (supports .csv/.cvs swap)
    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .unwrap_or_else(|| "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.cvs".to_string());
    let theme = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), swapped_ext = used_alt, "using input file");

    let candles = load_ohlc_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = candles.len(), "loaded candles");

    if candles.is_empty() {
        anyhow::bail!("no candles loaded, check headers/delimiter");
    }

    let n = candles.len();
    let (min_p, max_p) = minmax_price(&candles);
    info!(min = min_p, max = max_p, rows = n, "price range");
    let opts = WriteOptions::default();
    let times: Vec<Datum> = candles.iter().map(|c| c.t.clone()).collect();

    // 1) Candlesticks
    let candles_fig = figure(
        &theme,
        Candlestick::from_candles(&candles).with_name("OHLC").with_colors(theme.candle_up.clone(), theme.candle_down.clone()),
        "Candles",
        Axis::new("Price", min_p, max_p * 1.02),
    );
    write(&candles_fig, &out_name_with(&path, "candles"), &opts)?;

    // 2) OHLC Bars
    let bars_fig = figure(
        &theme,
        Ohlc::from_candles(&candles).with_name("OHLC").with_colors(theme.candle_up.clone(), theme.candle_down.clone()),
        "OHLC bars",
        Axis::new("Price", min_p, max_p * 1.02),
    );
    write(&bars_fig, &out_name_with(&path, "bars"), &opts)?;

    // 3) Close-open deltas as bars around a zero baseline, colored by sign
    let deltas: Vec<f64> = candles.iter().map(|c| c.c - c.o).collect();
    let colors = deltas
        .iter()
        .map(|d| if *d >= 0.0 { theme.candle_up.clone() } else { theme.candle_down.clone() })
        .collect();
    let (min_d, max_d) = minmax(&deltas);
    let delta_fig = figure(
        &theme,
        Bar::new(times.clone(), deltas.clone())
            .with_name("Close - Open")
            .with_base(0.0)
            .with_marker(Marker::new().with_colors(colors)),
        "Deltas",
        Axis::new("Delta Close-Open", min_d.min(0.0), max_d.max(0.0)),
    );
    write(&delta_fig, &out_name_with(&path, "deltas"), &opts)?;

    // 4) Distribution of deltas
    let mut hist_fig = Figure::new()
        .with_trace(Histogram::new(deltas).with_name("Delta distribution").with_bins(50).with_opacity(0.8))
        .with_layout(theme.apply(Layout::new().with_title("Delta histogram").with_axes(Axis::default(), Axis::default())));
    hist_fig.layout_mut().bar_gap = Some(0.05);
    write(&hist_fig, &out_name_with(&path, "hist"), &opts)?;

    // 5) Close line with a guide at the average close
    let closes: Vec<f64> = candles.iter().map(|c| c.c).collect();
    let avg_close = closes.iter().sum::<f64>() / n as f64;
    let (min_c, max_c) = minmax(&closes);
    let mut close_fig = figure(
        &theme,
        Scatter::new(times, closes)
            .with_name("Close")
            .with_mode(ScatterMode::LINES)
            .with_line(Line::new(theme.line_stroke.clone(), 1.5)),
        "Close",
        Axis::new("Close", min_c, max_c),
    );
    close_fig.layout_mut().add_shape(Shape::hline(avg_close, theme.crosshair.clone()));
    write(&close_fig, &out_name_with(&path, "close"), &opts)?;

    Ok(())
}

/// Single-trace figure over a date (or index) x axis, styled by `theme`.
fn figure(theme: &Theme, trace: impl Into<Trace>, title: &str, y_axis: Axis) -> Figure {
    let mut layout = Layout::new().with_title(title).with_axes(Axis::date("Time"), y_axis);
    layout.hover_mode = Some(HoverMode::XUnified);
    Figure::new().with_trace(trace).with_layout(theme.apply(layout))
}

fn write(fig: &Figure, out: &Path, opts: &WriteOptions) -> Result<()> {
    fig.write_json(out, opts).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), "wrote figure");
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.json
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("chart_{}.json", suffix));
    } else {
        out.push(format!("chart_{}_{}.json", short, suffix));
    }
    out
}

/// Load Binance-like OHLC CSV into Candle vec.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    // Common Binance headers
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };

        // x-value: parsed timestamp, else the row index
        let t = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time)
            .map(Datum::from)
            .unwrap_or_else(|| Datum::from(row));

        let (o, h, l, c) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close));
        if let (Some(o), Some(h), Some(l), Some(c)) = (o, h, l, c) {
            match Candle::try_new(t, o, h, l, c) {
                Ok(candle) => out.push(candle),
                Err(e) => {
                    warn!(row, error = %e, "skipping malformed candle");
                    skipped += 1;
                }
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows dropped");
    }
    Ok(out)
}

/// Epoch seconds or milliseconds, or an ISO-like date/date-time string.
fn parse_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
        return DateTime::from_timestamp(secs, 0).map(|d| d.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn swap_ext(p: &Path) -> Option<std::path::PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

fn minmax_price(c: &[Candle]) -> (f64, f64) {
    let mut min_p = f64::INFINITY;
    let mut max_p = f64::NEG_INFINITY;
    for k in c {
        min_p = min_p.min(k.l);
        max_p = max_p.max(k.h);
    }
    (min_p, max_p)
}

fn minmax(v: &[f64]) -> (f64, f64) {
    v.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)))
}
