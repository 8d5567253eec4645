// src/constants.rs

use plotters::style::colors::full_palette::{BLUE, GREEN, LIGHTBLUE, ORANGE, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;
pub const TRAJECTORY_PLOT_SIZE: u32 = 1080;

// Grid layout of the time-series figure. Columns grow with the number of panels.
pub const TIME_SERIES_GRID_ROWS: usize = 2;

// --- Input locations ---
pub const DEFAULT_INPUT_FILE: &str = "history.csv";
pub const RUNS_DIR: &str = "results";
pub const RUN_FILE_EXTENSION: &str = "csv";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// --- Log format ---
pub const FIELD_DELIMITER: u8 = b'|';
pub const VECTOR_DELIMITER: char = ',';

// --- Reference body ---
pub const EARTH_RADIUS_M: f64 = 6.3781e6;
pub const SPHERE_RESOLUTION: usize = 20;
// Padding applied to the shared 3D axis range.
pub const TRAJECTORY_RANGE_PADDING: f64 = 0.05;

// --- Plot Color Assignments ---
pub const COLOR_COMPONENT_X: &RGBColor = &RED;
pub const COLOR_COMPONENT_Y: &RGBColor = &GREEN;
pub const COLOR_COMPONENT_Z: &RGBColor = &BLUE;
pub const COLOR_CHARGE: &RGBColor = &BLUE;
pub const COLOR_EARTH: &RGBColor = &LIGHTBLUE;
pub const COLOR_TRAJECTORY: &RGBColor = &ORANGE;
pub const EARTH_SURFACE_OPACITY: f64 = 0.35;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_TRAJECTORY: u32 = 2;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 18;

// src/constants.rs
