// src/plot_functions/plot_time_series.rs

use plotters::style::RGBColor;

use log::warn;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::axis_names::{COMPONENT_COUNT, COMPONENT_NAMES};
use crate::constants::{
    COLOR_CHARGE, COLOR_COMPONENT_X, COLOR_COMPONENT_Y, COLOR_COMPONENT_Z, LINE_WIDTH_PLOT,
    TIME_SERIES_GRID_ROWS,
};
use crate::data_input::log_data::{TelemetryLog, VectorColumns};
use crate::error::TelemetryError;
use crate::plot_framework::{calculate_range, draw_grid_plot, time_range, PlotConfig, PlotSeries};

pub const TIME_LABEL: &str = "Time [s]";
pub const CHARGE_TITLE: &str = "Charge";
pub const CHARGE_UNIT: &str = "[Wh]";

const COMPONENT_COLORS: [&RGBColor; COMPONENT_COUNT] =
    [COLOR_COMPONENT_X, COLOR_COMPONENT_Y, COLOR_COMPONENT_Z];

fn check_length(
    quantity: &'static str,
    time: &[f64],
    values: &[f64],
) -> Result<(), TelemetryError> {
    if values.len() != time.len() {
        return Err(TelemetryError::LengthMismatch {
            quantity,
            expected: time.len(),
            found: values.len(),
        });
    }
    Ok(())
}

/// Pairs samples with their timestamps, dropping any point that is not finite.
fn finite_points(time: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    time.iter()
        .copied()
        .zip(values.iter().copied())
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .collect()
}

fn panel_config(title: &str, y_label: &str, time: &[f64], series: Vec<PlotSeries>) -> PlotConfig {
    let finite_time = || time.iter().copied().filter(|t| t.is_finite());
    let time_min = finite_time().fold(f64::INFINITY, f64::min);
    let time_max = finite_time().fold(f64::NEG_INFINITY, f64::max);

    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    for &(_, value) in series.iter().flat_map(|s| s.data.iter()) {
        if value.is_finite() {
            val_min = val_min.min(value);
            val_max = val_max.max(value);
        }
    }
    let (final_value_min, final_value_max) = calculate_range(val_min, val_max);

    PlotConfig {
        title: title.to_string(),
        x_range: time_range(time_min, time_max),
        y_range: final_value_min..final_value_max,
        series,
        x_label: TIME_LABEL.to_string(),
        y_label: y_label.to_string(),
    }
}

fn vector_panel(
    title: &'static str,
    unit: Option<&str>,
    time: &[f64],
    columns: &VectorColumns,
) -> Result<PlotConfig, TelemetryError> {
    let mut series = Vec::with_capacity(COMPONENT_COUNT);
    for (component_index, name) in COMPONENT_NAMES.iter().enumerate() {
        let values = columns.component(component_index);
        check_length(title, time, values)?;
        series.push(PlotSeries {
            data: finite_points(time, values),
            label: name.to_string(),
            color: *COMPONENT_COLORS[component_index],
            stroke_width: LINE_WIDTH_PLOT,
        });
    }
    Ok(panel_config(title, unit.unwrap_or(""), time, series))
}

fn charge_panel(time: &[f64], charge: &[f64]) -> Result<PlotConfig, TelemetryError> {
    check_length(CHARGE_TITLE, time, charge)?;
    let series = vec![PlotSeries {
        data: finite_points(time, charge),
        label: String::new(),
        color: *COLOR_CHARGE,
        stroke_width: LINE_WIDTH_PLOT,
    }];
    Ok(panel_config(CHARGE_TITLE, CHARGE_UNIT, time, series))
}

/// Builds one panel per vector quantity in log order, followed by the charge panel.
pub fn build_time_series_panels(log: &TelemetryLog) -> Result<Vec<PlotConfig>, TelemetryError> {
    let mut panels = Vec::with_capacity(log.vectors.len() + 1);
    for (quantity, columns) in &log.vectors {
        panels.push(vector_panel(quantity.title(), quantity.unit(), &log.time, columns)?);
    }
    panels.push(charge_panel(&log.time, &log.charge)?);
    Ok(panels)
}

/// Renders every quantity of the log against time into `<root_name>_telemetry.png`.
pub fn plot_time_series(
    log: &TelemetryLog,
    root_name: &str,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = output_dir.join(format!("{root_name}_telemetry.png"));
    let output_file = output_path.to_string_lossy().into_owned();
    let plot_type_name = "Telemetry";

    if log.is_empty() {
        warn!("'{root_name}' has no samples; every panel will show a placeholder.");
    }

    let panels = build_time_series_panels(log)?;
    let panel_count = panels.len();

    draw_grid_plot(
        &output_file,
        root_name,
        plot_type_name,
        panel_count,
        TIME_SERIES_GRID_ROWS,
        move |panel_index| panels.get(panel_index).cloned(),
    )?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::log_data::Quantity;

    fn sample_log() -> TelemetryLog {
        let mut position = VectorColumns::default();
        position.push([1.0, 2.0, 3.0]);
        position.push([4.0, 5.0, 6.0]);
        let mut sun = VectorColumns::default();
        sun.push([1.0, 0.0, 0.0]);
        sun.push([0.0, 1.0, 0.0]);
        TelemetryLog {
            time: vec![0.0, 1.0],
            charge: vec![10.0, 9.0],
            vectors: vec![(Quantity::Position, position), (Quantity::SunVector, sun)],
        }
    }

    #[test]
    fn panels_follow_log_order_with_charge_last() {
        let panels = build_time_series_panels(&sample_log()).unwrap();
        let titles: Vec<&str> = panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Position", "Sun vector", "Charge"]);
        assert!(panels.iter().all(|p| p.x_label == TIME_LABEL));
    }

    #[test]
    fn vector_panel_has_three_labelled_series() {
        let panels = build_time_series_panels(&sample_log()).unwrap();
        let position = &panels[0];
        assert_eq!(position.y_label, "[m]");
        let labels: Vec<&str> = position.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["x", "y", "z"]);
        assert_eq!(position.series[2].data, vec![(0.0, 3.0), (1.0, 6.0)]);
        assert_eq!(position.x_range, 0.0..1.0);
        assert!(position.y_range.start < 1.0 && position.y_range.end > 6.0);
    }

    #[test]
    fn sun_vector_panel_has_no_unit_and_charge_has_no_legend() {
        let panels = build_time_series_panels(&sample_log()).unwrap();
        assert_eq!(panels[1].y_label, "");
        assert_eq!(panels[2].y_label, CHARGE_UNIT);
        assert_eq!(panels[2].series.len(), 1);
        assert!(panels[2].series[0].label.is_empty());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut log = sample_log();
        log.charge.pop();
        let err = build_time_series_panels(&log).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::LengthMismatch { quantity: "Charge", expected: 2, found: 1 }
        ));
    }

    #[test]
    fn infinite_component_keeps_ranges_finite() {
        let mut log = sample_log();
        log.vectors[0].1.x[1] = f64::INFINITY;
        log.charge[0] = f64::NAN;
        let panels = build_time_series_panels(&log).unwrap();

        let position = &panels[0];
        assert!(position.y_range.start.is_finite() && position.y_range.end.is_finite());
        assert!(position.y_range.end > 6.0);
        assert_eq!(position.series[0].data, vec![(0.0, 1.0)]);

        let charge = &panels[2];
        assert_eq!(charge.series[0].data, vec![(1.0, 9.0)]);
        assert!(charge.y_range.start.is_finite() && charge.y_range.end.is_finite());
    }

    #[test]
    fn header_only_log_builds_empty_panels() {
        let log = TelemetryLog {
            vectors: vec![(Quantity::Position, VectorColumns::default())],
            ..TelemetryLog::default()
        };
        let panels = build_time_series_panels(&log).unwrap();
        assert_eq!(panels.len(), 2);
        assert!(panels.iter().all(|p| p.series.iter().all(|s| s.data.is_empty())));
    }
}

// src/plot_functions/plot_time_series.rs
