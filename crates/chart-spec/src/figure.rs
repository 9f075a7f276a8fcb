// File: crates/chart-spec/src/figure.rs
// Summary: Figure root (data + layout + config) and its JSON output pipeline.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ChartError, Result};
use crate::layout::Layout;
use crate::traces::Trace;

/// Output knobs for [`Figure::write_json`].
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    pub pretty: bool,
    /// Create missing parent directories of the output path.
    pub create_dirs: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { pretty: true, create_dirs: true }
    }
}

/// Root of the chart specification. `data` is always emitted, even when empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
}

impl Figure {
    pub fn new() -> Self { Self::default() }

    pub fn add_trace(&mut self, trace: impl Into<Trace>) {
        self.data.push(trace.into());
    }

    pub fn with_trace(mut self, trace: impl Into<Trace>) -> Self {
        self.add_trace(trace);
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Layout, created empty on first access.
    pub fn layout_mut(&mut self) -> &mut Layout {
        self.layout.get_or_insert_with(Layout::default)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        let s = serde_json::to_string(self)?;
        debug!(traces = self.data.len(), bytes = s.len(), "encoded figure");
        Ok(s)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let s = serde_json::to_string_pretty(self)?;
        debug!(traces = self.data.len(), bytes = s.len(), "encoded figure (pretty)");
        Ok(s)
    }

    /// Write the figure as JSON to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>, opts: &WriteOptions) -> Result<()> {
        let path = path.as_ref();
        let body = if opts.pretty { self.to_json_pretty()? } else { self.to_json()? };

        if opts.create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|source| ChartError::Io { path: parent.to_path_buf(), source })?;
            }
        }
        std::fs::write(path, body.as_bytes())
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), bytes = body.len(), "wrote figure");
        Ok(())
    }
}
