use std::path::{Path, PathBuf};

use crate::config::PlotConfig;
use crate::data::{self, model::FluxSeries};
use crate::render;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    /// Plot settings shared with the saved figure.
    pub config: PlotConfig,

    /// Series currently on screen (None until something loads).
    pub series: Option<FluxSeries>,

    /// File the series came from.
    pub source: Option<PathBuf>,

    /// Whether the background grid is drawn.
    pub show_grid: bool,

    /// Whether star markers are drawn on top of the line.
    pub show_markers: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            show_grid: config.grid,
            show_markers: config.markers,
            config,
            series: None,
            source: None,
            status_message: None,
        }
    }

    /// Show an already loaded series.
    pub fn set_series(&mut self, series: FluxSeries, source: Option<PathBuf>) {
        self.series = Some(series);
        self.source = source;
        self.status_message = None;
    }

    /// Load a flux file against the configured thickness axis.  On failure
    /// the previous series stays on screen and the error is shown.
    pub fn load_path(&mut self, path: &Path) {
        match data::load_series(path, &self.config) {
            Ok(series) => {
                log::info!("Loaded {} points from {}", series.len(), path.display());
                self.set_series(series, Some(path.to_path_buf()));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Save the current series as an SVG figure.
    pub fn export(&mut self, path: &Path) {
        let Some(series) = &self.series else {
            self.status_message = Some("Nothing to export".to_string());
            return;
        };
        let config = PlotConfig {
            grid: self.show_grid,
            markers: self.show_markers,
            ..self.config.clone()
        };
        match render::save_figure(series, &config, path) {
            Ok(()) => {
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export figure: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Window title naming the loaded file.
    pub fn title(&self) -> String {
        match &self.source {
            Some(path) => format!("Flux profile – {}", path.display()),
            None => "Flux profile".to_string(),
        }
    }
}
