use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::color::SeriesColor;
use crate::config::PlotConfig;
use crate::data::model::FluxSeries;
use crate::error::FluxError;

/// Ratio of a star marker's inner vertices to its outer points.
const STAR_INNER_RATIO: f64 = 0.4;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Render the flux figure and write it to `path`, creating parent
/// directories as needed.
pub fn save_figure(series: &FluxSeries, config: &PlotConfig, path: &Path) -> Result<()> {
    let svg = render_svg(series, config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Saved figure to {}", path.display());
    Ok(())
}

/// Render the flux figure as an SVG document.
///
/// Output depends only on the series and config, so identical input gives
/// byte-identical documents.
pub fn render_svg(series: &FluxSeries, config: &PlotConfig) -> Result<String, FluxError> {
    let color = SeriesColor::parse(&config.color)?.to_plotters();

    let skipped = series.non_finite_count();
    if skipped > 0 {
        log::warn!("{skipped} non-finite flux values are not drawn");
    }
    if config.legend && config.series_label.is_none() {
        log::warn!("Legend requested but the series has no label; skipping legend");
    }

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
        draw_figure(&root, series, config, color).map_err(render_error)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

fn render_error(e: DrawingAreaErrorKind<std::io::Error>) -> FluxError {
    FluxError::Render(e.to_string())
}

// ---------------------------------------------------------------------------
// Figure layout
// ---------------------------------------------------------------------------

fn draw_figure(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    series: &FluxSeries,
    config: &PlotConfig,
    color: RGBColor,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    root.fill(&WHITE)?;

    let label_px = config.label_font_px();
    let tick_px = config.tick_font_px();
    let (x_range, y_range) = series.bounds();

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size((label_px + tick_px * 2.5).round() as u32)
        .y_label_area_size((label_px + tick_px * 5.0).round() as u32)
        .build_cartesian_2d(x_range, y_range)?;

    let grid_style = if config.grid {
        BLACK.mix(0.15)
    } else {
        TRANSPARENT
    };

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .axis_desc_style(FontDesc::new(FontFamily::SansSerif, label_px, FontStyle::Normal))
        .label_style(FontDesc::new(FontFamily::SansSerif, tick_px, FontStyle::Normal))
        .x_label_formatter(&|v| format_tick(*v))
        .y_label_formatter(&|v| format_tick(*v))
        .bold_line_style(grid_style)
        .light_line_style(TRANSPARENT)
        .draw()?;

    let line_style = ShapeStyle {
        color: color.to_rgba(),
        filled: false,
        stroke_width: config.line_width,
    };
    for run in finite_runs(series) {
        chart.draw_series(LineSeries::new(run, line_style))?;
    }

    // markers off: draw none, keeping a series to hang the legend entry on
    let star = star_vertices(config.marker_size);
    let marked = series.finite_points().filter(|_| config.markers);
    let markers = chart.draw_series(
        marked.map(|p| EmptyElement::at(p) + Polygon::new(star.clone(), color.filled())),
    )?;

    let label = config.series_label.as_deref().filter(|_| config.legend);
    if let Some(label) = label {
        let entry = markers.label(label);
        if config.markers {
            let legend_star = star_vertices(config.marker_size.min(6));
            entry.legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(-10, 0), (10, 0)], line_style)
                    + Polygon::new(legend_star.clone(), color.filled())
            });
        } else {
            entry.legend(move |(x, y)| {
                PathElement::new(vec![(x - 10, y), (x + 10, y)], line_style)
            });
        }

        chart
            .configure_series_labels()
            .label_font(FontDesc::new(
                FontFamily::SansSerif,
                config.legend_font_px(),
                FontStyle::Normal,
            ))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    Ok(())
}

/// Contiguous runs of finite points, so a NaN breaks the line instead of
/// dragging it off-chart.
fn finite_runs(series: &FluxSeries) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in series.points() {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Five-pointed star centred on the origin, first point straight up
/// (backend y grows downwards).
pub fn star_vertices(radius: u32) -> Vec<(i32, i32)> {
    let outer = radius as f64;
    let inner = outer * STAR_INNER_RATIO;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = (-90.0 + 36.0 * i as f64).to_radians();
            (
                (r * angle.cos()).round() as i32,
                (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a < 1e-12 {
        return "0".to_string();
    }
    if !(1e-3..1e5).contains(&a) {
        return format!("{v:.1e}");
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
