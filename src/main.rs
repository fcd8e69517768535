use anyhow::{Context, Result};
use eframe::egui;

use flux_plot::app::FluxPlotApp;
use flux_plot::config::PlotConfig;
use flux_plot::state::ViewerState;

fn main() -> Result<()> {
    env_logger::init();

    let config = PlotConfig::load().context("loading configuration")?;
    let series = flux_plot::plot_flux(&config)?;

    if !config.show {
        return Ok(());
    }

    let mut state = ViewerState::new(config.clone());
    state.set_series(series, Some(config.input.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32 + 220.0, config.height as f32])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flux profile",
        options,
        Box::new(|_cc| Ok(Box::new(FluxPlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("opening display window: {e}"))
}
