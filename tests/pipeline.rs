//! End-to-end runs of the load → axis → render → save pipeline.

use std::path::Path;

use flux_plot::config::PlotConfig;
use flux_plot::error::FluxError;
use flux_plot::plot_flux;
use flux_plot::sim::{self, Slab};

fn config_in(dir: &Path) -> PlotConfig {
    PlotConfig {
        input: dir.join("flux_output.txt"),
        output: dir.join("Flux.svg"),
        show: false,
        ..PlotConfig::default()
    }
}

fn write_values(path: &Path, n: usize) {
    let text: String = (0..n).map(|i| format!("{}\n", 250.0 + 10.0 * i as f64)).collect();
    std::fs::write(path, text).unwrap();
}

#[test]
fn ten_values_produce_a_figure() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    write_values(&config.input, 10);

    let series = plot_flux(&config).unwrap();

    assert_eq!(series.len(), 10);
    assert!((series.thickness()[1] - 1.0 / 9.0).abs() < 1e-12);
    assert_eq!(series.thickness()[9], 1.0);
    let svg = std::fs::read_to_string(&config.output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Thickness (m)"));
}

#[test]
fn rerun_produces_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    write_values(&config.input, 10);

    plot_flux(&config).unwrap();
    let first = std::fs::read(&config.output).unwrap();
    plot_flux(&config).unwrap();
    let second = std::fs::read(&config.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn wrong_value_count_is_a_length_error() {
    for n in [9, 11] {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_values(&config.input, n);

        let err = plot_flux(&config).unwrap_err();
        match err.downcast_ref::<FluxError>() {
            Some(FluxError::LengthMismatch { thickness, flux }) => {
                assert_eq!(*thickness, 10);
                assert_eq!(*flux, n);
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
        assert!(!config.output.exists());
    }
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let err = plot_flux(&config).unwrap_err();
    assert!(format!("{err:#}").contains("flux_output.txt"));
    assert!(!config.output.exists());
}

#[test]
fn simulated_tally_plots_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let tally = sim::simulate(&Slab::two_region(), 5_000, 3);
    sim::write_flux(&config.input, &tally.flux).unwrap();

    let series = plot_flux(&config).unwrap();
    assert_eq!(series.flux(), tally.flux.as_slice());
    assert!(config.output.exists());
}
