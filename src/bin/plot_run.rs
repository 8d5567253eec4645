// src/bin/plot_run.rs

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

use cubesat_telemetry_plot::constants::DEFAULT_OUTPUT_DIR;
use cubesat_telemetry_plot::data_input::schema::{Schema, SCHEMA_B};
use cubesat_telemetry_plot::data_input::{read_telemetry, run_file_path};
use cubesat_telemetry_plot::plot_functions::plot_time_series::plot_time_series;
use cubesat_telemetry_plot::{crate_version, init_logging};

const USAGE_MESSAGE: &str =
    "Please give the name of the run to plot, e.g. `telemetry-plot-run orbit1` reads results/orbit1.csv";

/// Plots a named simulation run, including rotational velocity, against time.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Run name; the log is read from results/<NAME>.csv
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Directory the PNG is written to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Column layout of the log
    #[arg(long, value_name = "a|b|simulator|trajectory", default_value = SCHEMA_B.name)]
    schema: String,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let Some(name) = args.name else {
        println!("{USAGE_MESSAGE}");
        return Ok(());
    };
    info!("telemetry-plot-run {}", crate_version());

    let schema = Schema::by_name(&args.schema)?;
    let input = run_file_path(&name);
    let log = read_telemetry(&input, schema)
        .with_context(|| format!("cannot plot run '{name}'"))?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("cannot create '{}'", args.output_dir.display()))?;
    plot_time_series(&log, &name, &args.output_dir)
        .map_err(|err| anyhow!("rendering failed: {err}"))?;
    Ok(())
}
