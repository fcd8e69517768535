/// Data layer: loading, the thickness axis, and the paired series.
///
/// Architecture:
/// ```text
///  flux_output.txt / .csv        linspace(0, 1, n)
///        │                              │
///        ▼                              ▼
///   ┌──────────┐                  ┌──────────┐
///   │  loader   │  Vec<f64>       │   axis    │  Vec<f64>
///   └──────────┘                  └──────────┘
///        │                              │
///        └──────────────┬───────────────┘
///                       ▼
///                ┌────────────┐
///                │ FluxSeries │  equal lengths, non-empty
///                └────────────┘
/// ```

pub mod axis;
pub mod loader;
pub mod model;

use std::path::Path;

use anyhow::Result;

use crate::config::PlotConfig;
use model::FluxSeries;

/// Load the configured input file and pair it with the configured axis.
pub fn load_series(path: &Path, config: &PlotConfig) -> Result<FluxSeries> {
    let flux = loader::load_flux(path)?;
    let thickness = axis::linspace(config.x_start, config.x_end, config.points);
    if thickness.len() != flux.len() {
        log::debug!(
            "{} holds {} values but the thickness axis has {} points",
            path.display(),
            flux.len(),
            thickness.len()
        );
    }
    Ok(FluxSeries::new(thickness, flux)?)
}
