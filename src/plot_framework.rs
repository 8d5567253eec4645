// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::element::Text;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use log::{info, warn};
use std::error::Error;
use std::ops::Range;

use crate::constants::{FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Time axis range: the exact data span, widened only when degenerate.
pub fn time_range(time_min: f64, time_max: f64) -> Range<f64> {
    if time_max > time_min {
        time_min..time_max
    } else {
        let (start, end) = calculate_range(time_min, time_max);
        start..end
    }
}

/// Format Y-axis tick labels with "k" and "M" notation for large values.
/// Small fractional values keep one decimal, tiny ones switch to exponent form.
pub fn format_y_axis_label(y: f64) -> String {
    let magnitude = y.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if magnitude >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if magnitude > 0.0 && magnitude < 0.1 {
        format!("{:.1e}", y)
    } else if magnitude < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_title: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{panel_title} Data Unavailable:\n{reason}");

    // Estimate text dimensions for better centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

impl PlotConfig {
    fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    /// Both ranges must be finite and non-empty; plotters cannot place ticks otherwise.
    fn valid_ranges(&self) -> bool {
        let finite = |r: &Range<f64>| r.start.is_finite() && r.end.is_finite();
        finite(&self.x_range)
            && finite(&self.y_range)
            && self.x_range.end > self.x_range.start
            && self.y_range.end > self.y_range.start
    }
}

/// Rows and columns needed to lay out `panel_count` panels over a fixed row count.
pub fn grid_dimensions(panel_count: usize, rows: usize) -> (usize, usize) {
    let rows = rows.max(1);
    let cols = panel_count.div_ceil(rows).max(1);
    (rows, cols)
}

/// Draws a single line chart. Series with an empty label are left out of the legend.
fn draw_single_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_axis_label(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.stroke_width(s.stroke_width),
        ))?;

        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Creates one image holding a grid of line charts.
///
/// `get_panel_plot_data` is called once per panel index in row-major order;
/// returning `None` draws a placeholder message in that cell. Cells past
/// `panel_count` stay blank.
pub fn draw_grid_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    panel_count: usize,
    grid_rows: usize,
    mut get_panel_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly(grid_dimensions(panel_count, grid_rows));
    let mut any_panel_plotted = false;

    for (panel_index, area) in sub_plot_areas.iter().enumerate().take(panel_count) {
        match get_panel_plot_data(panel_index) {
            Some(plot_config) => {
                let has_data = plot_config.has_data();
                if has_data && plot_config.valid_ranges() {
                    draw_single_chart_with_config(area, &plot_config)?;
                    any_panel_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, &plot_config.title, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, plot_type_name, "Data Extraction Failed")?;
            }
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        info!("{plot_type_name} plot saved as '{output_filename}'.");
    } else {
        warn!("'{output_filename}' holds only placeholder messages: no panel had data to plot.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_padded_and_ordered() {
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!((lo - -1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn flat_range_gets_fixed_padding() {
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn single_sample_time_range_is_widened() {
        assert_eq!(time_range(0.0, 10.0), 0.0..10.0);
        assert_eq!(time_range(4.0, 4.0), 3.5..4.5);
    }

    #[test]
    fn grid_grows_columns_with_panel_count() {
        assert_eq!(grid_dimensions(6, 2), (2, 3));
        assert_eq!(grid_dimensions(7, 2), (2, 4));
        assert_eq!(grid_dimensions(8, 2), (2, 4));
        assert_eq!(grid_dimensions(0, 2), (2, 1));
    }

    fn config_with_ranges(x_range: Range<f64>, y_range: Range<f64>) -> PlotConfig {
        PlotConfig {
            title: "Position".to_string(),
            x_range,
            y_range,
            series: Vec::new(),
            x_label: String::new(),
            y_label: String::new(),
        }
    }

    #[test]
    fn infinite_or_nan_ranges_are_invalid() {
        assert!(config_with_ranges(0.0..1.0, -1.0..1.0).valid_ranges());
        assert!(!config_with_ranges(0.0..1.0, -1.0..f64::INFINITY).valid_ranges());
        assert!(!config_with_ranges(f64::NEG_INFINITY..1.0, -1.0..1.0).valid_ranges());
        assert!(!config_with_ranges(0.0..1.0, f64::NAN..1.0).valid_ranges());
        assert!(!config_with_ranges(1.0..1.0, -1.0..1.0).valid_ranges());
    }

    #[test]
    fn empty_data_yields_non_finite_range() {
        let (lo, hi) = calculate_range(f64::INFINITY, f64::NEG_INFINITY);
        assert!(!config_with_ranges(0.0..1.0, lo..hi).valid_ranges());
    }
}

// src/plot_framework.rs
