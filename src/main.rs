// src/main.rs

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

use cubesat_telemetry_plot::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR};
use cubesat_telemetry_plot::data_input::read_telemetry;
use cubesat_telemetry_plot::data_input::schema::{Schema, SCHEMA_A};
use cubesat_telemetry_plot::plot_functions::plot_time_series::plot_time_series;
use cubesat_telemetry_plot::{crate_version, init_logging};

/// Plots position, velocity, acceleration, rotation, sun vector and charge against time.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Telemetry log to read
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Directory the PNG is written to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Column layout of the log
    #[arg(long, value_name = "a|b|simulator|trajectory", default_value = SCHEMA_A.name)]
    schema: String,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    info!("telemetry-plot {}", crate_version());

    let schema = Schema::by_name(&args.schema)?;
    let log = read_telemetry(&args.input, schema)
        .with_context(|| format!("cannot plot '{}'", args.input.display()))?;

    let root_name = args
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("cannot create '{}'", args.output_dir.display()))?;
    plot_time_series(&log, &root_name, &args.output_dir)
        .map_err(|err| anyhow!("rendering failed: {err}"))?;
    Ok(())
}
