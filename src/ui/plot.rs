use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Flux plot (central panel)
// ---------------------------------------------------------------------------

/// Render the flux profile in the central panel.
pub fn flux_plot(ui: &mut Ui, state: &ViewerState) {
    let series = match &state.series {
        Some(s) => s,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a flux file to plot it  (File → Open…)");
            });
            return;
        }
    };

    let config = &state.config;
    let color = config.series_color().unwrap_or_default().to_color32();
    let name = config.series_label.clone().unwrap_or_default();

    let mut plot = Plot::new("flux_plot")
        .x_axis_label(config.x_label.as_str())
        .y_axis_label(config.y_label.as_str())
        .show_grid(state.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if config.legend && config.series_label.is_some() {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        let line_points: PlotPoints = series.finite_points().map(|(x, y)| [x, y]).collect();
        plot_ui.line(
            Line::new(line_points)
                .name(&name)
                .color(color)
                .width(config.line_width as f32),
        );

        if state.show_markers {
            let marker_points: PlotPoints =
                series.finite_points().map(|(x, y)| [x, y]).collect();
            plot_ui.points(
                Points::new(marker_points)
                    .name(&name)
                    .shape(MarkerShape::Asterisk)
                    .radius(config.marker_size as f32 * 0.75)
                    .color(color),
            );
        }
    });
}
