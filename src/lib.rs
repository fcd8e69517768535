pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod sim;
pub mod state;
pub mod ui;

use anyhow::Result;

use config::PlotConfig;
use data::model::FluxSeries;

/// Load the configured input, pair it with the thickness axis and save the
/// figure. Returns the series so the viewer can show it.
pub fn plot_flux(config: &PlotConfig) -> Result<FluxSeries> {
    let series = data::load_series(&config.input, config)?;
    render::save_figure(&series, config, &config.output)?;
    Ok(series)
}
