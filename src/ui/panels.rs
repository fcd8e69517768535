use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – data table
// ---------------------------------------------------------------------------

/// Render the left panel listing every point of the series.
pub fn side_panel(ui: &mut Ui, state: &ViewerState) {
    ui.heading("Data");
    ui.separator();

    let Some(series) = &state.series else {
        ui.label("No data loaded.");
        return;
    };

    if let Some(path) = &state.source {
        ui.label(RichText::new(path.display().to_string()).small());
    }
    let (min, max) = series
        .finite_points()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(y), hi.max(y))
        });
    if min <= max {
        ui.label(format!("min {min:.4}   max {max:.4}"));
    }
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("flux_table")
                .striped(true)
                .num_columns(2)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Thickness (m)");
                    ui.strong("Flux");
                    ui.end_row();
                    for (x, y) in series.points() {
                        ui.label(format!("{x:.4}"));
                        if y.is_finite() {
                            ui.label(format!("{y:.6}"));
                        } else {
                            ui.label(RichText::new(y.to_string()).color(Color32::RED));
                        }
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.series.is_some(), egui::Button::new("Export SVG…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(series) = &state.series {
            ui.label(format!("{} points", series.len()));
            ui.separator();
        }

        if ui.selectable_label(state.show_grid, "Grid").clicked() {
            state.show_grid = !state.show_grid;
        }
        if ui.selectable_label(state.show_markers, "Markers").clicked() {
            state.show_markers = !state.show_markers;
        }

        if let Some(msg) = &state.status_message {
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Open flux data")
        .add_filter("Supported files", &["txt", "dat", "csv"])
        .add_filter("Text", &["txt", "dat"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut ViewerState) {
    let default_name = state
        .config
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Flux.svg".to_string());

    let file = rfd::FileDialog::new()
        .set_title("Export figure")
        .set_file_name(default_name)
        .add_filter("SVG", &["svg"])
        .save_file();

    if let Some(path) = file {
        state.export(&path);
    }
}
