//! Render the population line chart to **SVG** or **PNG**.
//!
//! This follows the declarative spec from [`crate::chart`]: a single line in
//! the series color with filled point markers, thousands-grouped labels on
//! the Y axis, one label slot per year on the X axis. The backend is picked
//! by file extension.

use crate::chart::{CHART_TITLE, POINT_SIZE, Y_TICK_COUNT};
use crate::format;
use crate::models::DataSet;
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// Series color of the dashboard (#3B825C).
const SERIES_RGB: RGBColor = RGBColor(0x3B, 0x82, 0x5C);

static FONT_INIT: Once = Once::new();

/// Register a TTF/OTF font for the `ab_glyph` text path. The crate ships no
/// font asset, so the host supplies one (the CLI exposes `--font`). The first
/// call wins; later calls are no-ops.
pub fn register_font(bytes: &'static [u8]) {
    FONT_INIT.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            bytes,
        );
    });
}

/// Render the series to `out_path` (`.svg` or any bitmap extension).
pub fn plot_series<P: AsRef<Path>>(
    dataset: &DataSet,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, dataset)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, dataset)?;
    }
    log::debug!("rendered chart to {}", out_path.display());
    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, dataset: &DataSet) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let min_year = dataset.first().year();
    let max_year = dataset.last().year();
    let (mut min_val, mut max_val) = (
        dataset.min_population() as f64,
        dataset.max_population() as f64,
    );
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }
    // 5% headroom so markers at the extremes stay visible
    let pad = (max_val - min_val) * 0.05;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(min_year..max_year, (min_val - pad)..(max_val + pad))
        .map_err(|e| anyhow!("{:?}", e))?;

    // Y labels use the space-grouped style; X labels are plain 4-digit years
    let y_label_fmt = |v: &f64| {
        let n = (*v).round() as i64;
        format::style_thousands(n).unwrap_or_else(|_| n.to_string())
    };
    let x_label_fmt = |y: &i32| y.to_string();

    // Limit label counts to avoid overlap
    let x_label_count = dataset.len().min(12);

    chart
        .configure_mesh()
        .x_desc("Année")
        .y_desc("Population")
        .x_labels(x_label_count)
        .y_labels(Y_TICK_COUNT)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let series: Vec<(i32, f64)> = dataset
        .iter()
        .map(|o| (o.year(), o.population() as f64))
        .collect();

    let style = ShapeStyle {
        color: SERIES_RGB.to_rgba(),
        filled: false,
        stroke_width: 2,
    };
    chart
        .draw_series(LineSeries::new(series.clone(), style))
        .map_err(|e| anyhow!("{:?}", e))?;
    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), POINT_SIZE as i32, SERIES_RGB.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
