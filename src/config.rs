use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::color::SeriesColor;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "FLUX_PLOT_CONFIG";

/// Pixels per typographic point at the figure's 100 dpi.
const PX_PER_PT: f64 = 100.0 / 72.0;

// ---------------------------------------------------------------------------
// PlotConfig
// ---------------------------------------------------------------------------

/// Everything the pipeline needs, with defaults reproducing the stock
/// flux figure. Any subset of fields can be overridden from JSON:
///
/// ```json
/// { "input": "run2/flux_output.txt", "show": false, "color": "#1f77b4" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of thickness points generated for the x-axis.
    pub points: usize,
    pub x_start: f64,
    pub x_end: f64,
    /// Figure size in pixels.
    pub width: u32,
    pub height: u32,
    pub x_label: String,
    pub y_label: String,
    /// Font sizes in points.
    pub label_font_size: f64,
    pub tick_font_size: f64,
    pub legend_font_size: f64,
    pub color: String,
    /// Marker radius in pixels.
    pub marker_size: u32,
    pub line_width: u32,
    /// Draw star markers on the data points.
    pub markers: bool,
    pub grid: bool,
    pub legend: bool,
    pub series_label: Option<String>,
    /// Open the interactive window after saving.
    pub show: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("flux_output.txt"),
            output: PathBuf::from("Flux.svg"),
            points: 10,
            x_start: 0.0,
            x_end: 1.0,
            width: 800,
            height: 700,
            x_label: "Thickness (m)".to_string(),
            y_label: "Flux (N/cm2*s)".to_string(),
            label_font_size: 16.0,
            tick_font_size: 16.0,
            legend_font_size: 10.0,
            color: "g".to_string(),
            marker_size: 8,
            line_width: 2,
            markers: true,
            grid: true,
            legend: true,
            series_label: Some("Flux".to_string()),
            show: true,
        }
    }
}

impl PlotConfig {
    /// Read the file named by `FLUX_PLOT_CONFIG`, or fall back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Using config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: PlotConfig = serde_json::from_str(text).context("parsing JSON")?;
        config.series_color()?;
        Ok(config)
    }

    pub fn series_color(&self) -> Result<SeriesColor> {
        Ok(SeriesColor::parse(&self.color)?)
    }

    pub fn label_font_px(&self) -> f64 {
        self.label_font_size * PX_PER_PT
    }

    pub fn tick_font_px(&self) -> f64 {
        self.tick_font_size * PX_PER_PT
    }

    pub fn legend_font_px(&self) -> f64 {
        self.legend_font_size * PX_PER_PT
    }
}
