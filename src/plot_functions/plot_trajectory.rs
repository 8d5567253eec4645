// src/plot_functions/plot_trajectory.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::{PathElement, Polygon, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont};

use log::{info, warn};
use std::error::Error;
use std::f64::consts::PI;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_EARTH, COLOR_TRAJECTORY, EARTH_RADIUS_M, EARTH_SURFACE_OPACITY, LINE_WIDTH_LEGEND,
    LINE_WIDTH_TRAJECTORY, SPHERE_RESOLUTION, TRAJECTORY_PLOT_SIZE, TRAJECTORY_RANGE_PADDING,
};
use crate::data_input::log_data::{Quantity, TelemetryLog};
use crate::error::TelemetryError;
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};
use crate::plot_framework::format_y_axis_label;

pub type Point3 = (f64, f64, f64);

/// `count` evenly spaced samples from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Parametric sphere grid: `mesh[i][j]` is the point at azimuth `u_i` in
/// [0, 2π] and polar angle `v_j` in [0, π].
pub fn sphere_mesh(radius: f64, resolution: usize) -> Vec<Vec<Point3>> {
    let azimuths = linspace(0.0, 2.0 * PI, resolution);
    let polar_angles = linspace(0.0, PI, resolution);
    azimuths
        .iter()
        .map(|&u| {
            polar_angles
                .iter()
                .map(|&v| {
                    (
                        radius * u.cos() * v.sin(),
                        radius * u.sin() * v.sin(),
                        radius * v.cos(),
                    )
                })
                .collect()
        })
        .collect()
}

/// Splits a sphere grid into the quadrilateral patches that make up its surface.
pub fn sphere_quads(mesh: &[Vec<Point3>]) -> Vec<[Point3; 4]> {
    mesh.windows(2)
        .flat_map(|pair| {
            let (row, next) = (&pair[0], &pair[1]);
            (0..row.len().saturating_sub(1))
                .map(move |j| [row[j], next[j], next[j + 1], row[j + 1]])
        })
        .collect()
}

/// One symmetric range shared by all three axes so the scene keeps equal aspect.
/// It covers the reference sphere and every trajectory point.
pub fn equal_aspect_range(radius: f64, trajectory: &[Point3]) -> Range<f64> {
    let extent = trajectory
        .iter()
        .flat_map(|&(x, y, z)| [x.abs(), y.abs(), z.abs()])
        .filter(|v| v.is_finite())
        .fold(radius.abs(), f64::max);
    let half = extent * (1.0 + TRAJECTORY_RANGE_PADDING);
    -half..half
}

// plotters draws its Y axis vertically; data z goes there.
fn to_chart((x, y, z): Point3) -> Point3 {
    (x, z, y)
}

/// Renders the position trajectory around Earth into `<root_name>_trajectory.png`.
pub fn plot_trajectory(
    log: &TelemetryLog,
    root_name: &str,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let position = log
        .position()
        .ok_or(TelemetryError::MissingQuantity(Quantity::Position.title()))?;
    if position.is_empty() {
        warn!("'{root_name}' has no position samples; drawing Earth only.");
    }
    let trajectory: Vec<Point3> = position
        .points()
        .filter(|&(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite())
        .collect();
    if trajectory.len() < position.len() {
        warn!(
            "Skipped {} non-finite position samples.",
            position.len() - trajectory.len()
        );
    }

    let output_path = output_dir.join(format!("{root_name}_trajectory.png"));
    let output_file = output_path.to_string_lossy().into_owned();

    let axis_range = equal_aspect_range(EARTH_RADIUS_M, &trajectory);
    let (lo, hi) = (axis_range.start, axis_range.end);

    let root_area = BitMapBackend::new(&output_file, (TRAJECTORY_PLOT_SIZE, TRAJECTORY_PLOT_SIZE))
        .into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(root_name, FONT_TUPLE_CHART_TITLE)
        .margin(20)
        .build_cartesian_3d(axis_range.clone(), axis_range.clone(), axis_range.clone())?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .x_formatter(&|v| format_y_axis_label(*v))
        .y_formatter(&|v| format_y_axis_label(*v))
        .z_formatter(&|v| format_y_axis_label(*v))
        .draw()?;

    let earth_color = COLOR_EARTH.mix(EARTH_SURFACE_OPACITY);
    let quads = sphere_quads(&sphere_mesh(EARTH_RADIUS_M, SPHERE_RESOLUTION));
    chart
        .draw_series(
            quads
                .into_iter()
                .map(|quad| Polygon::new(quad.map(to_chart).to_vec(), earth_color.filled())),
        )?
        .label("Earth")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], earth_color.filled()));

    let trajectory_color = *COLOR_TRAJECTORY;
    chart
        .draw_series(LineSeries::new(
            trajectory.iter().copied().map(to_chart),
            trajectory_color.stroke_width(LINE_WIDTH_TRAJECTORY),
        ))?
        .label("Position")
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                trajectory_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        });

    let label_font = FONT_TUPLE_AXIS_LABEL.into_font().color(&BLACK);
    let axis_titles = [
        ("x [m]", (hi, lo, lo)),
        ("y [m]", (lo, hi, lo)),
        ("z [m]", (lo, lo, hi)),
    ];
    chart.draw_series(
        axis_titles
            .into_iter()
            .map(|(title, at)| Text::new(title, to_chart(at), label_font.clone())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(FONT_TUPLE_LEGEND)
        .draw()?;

    root_area.present()?;
    info!("Trajectory plot saved as '{output_file}'.");
    Ok(output_path)
}


// src/plot_functions/plot_trajectory.rs
