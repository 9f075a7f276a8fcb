// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that encodes a simple line chart to a figure JSON file.

use anyhow::{Context, Result};
use chart_spec::traces::scatter::ScatterMode;
use chart_spec::{Axis, CommonAttributes, Figure, Layout, Marker, Scatter, Theme, WriteOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Build a simple line series
    let data = vec![
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (3.0, 1.8),
        (4.0, 1.4),
        (5.0, 2.0),
    ];

    let theme = Theme::dark();
    let series = Scatter::from_points(&data)
        .with_name("signal")
        .with_mode(ScatterMode::LINES | ScatterMode::MARKERS)
        .with_marker(Marker::new().with_color(theme.line_stroke.clone()).with_size(6.0));
    let layout = theme.apply(
        Layout::new()
            .with_title("Lines")
            .with_axes(Axis::new("X", 0.0, 5.0), Axis::new("Y", 0.0, 2.2)),
    );
    let fig = Figure::new().with_trace(series).with_layout(layout);

    let out = std::path::PathBuf::from("target/out/example_lines.json");
    fig.write_json(&out, &WriteOptions::default())
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(path = %out.display(), traces = fig.data.len(), "wrote figure");
    Ok(())
}
