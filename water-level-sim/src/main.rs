use std::{path::PathBuf, process::ExitCode, thread, time::Duration};

use clap::Parser;
use log::{error, info};
use water_level_sim::{CalibrationTable, Simulation};

/// Feeds simulated ADC readings through a polynomial calibration curve.
#[derive(Debug, Parser)]
#[command(name = "water-level-sim")]
struct Args {
    /// JSON calibration table. The built-in water level curve is used when omitted
    #[arg(long)]
    table: Option<PathBuf>,

    /// Delay between readings
    #[arg(long = "interval-ms", default_value_t = 2000)]
    interval_ms: u64,

    /// Stop after this many readings instead of running forever
    #[arg(long)]
    samples: Option<u64>,

    /// Seed for a reproducible reading sequence
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let table = match &args.table {
        Some(path) => match CalibrationTable::load(path) {
            Ok(table) => table,
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => CalibrationTable::water_level(),
    };

    info!(
        "Configuring regressor with {} terms over [{}, {}]",
        table.terms.len(),
        table.min_input_value,
        table.max_input_value
    );

    let mut simulation = match Simulation::start(&table, args.seed) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("Failed to configure regressor: {}", err);
            return ExitCode::FAILURE;
        }
    };

    info!("Regressor configured, starting simulation");

    let interval = Duration::from_millis(args.interval_ms);
    let mut samples_taken = 0;

    while args.samples.map_or(true, |limit| samples_taken < limit) {
        if samples_taken > 0 {
            thread::sleep(interval);
        }

        let sample = simulation.step();
        info!("{}", simulation.describe(&sample));
        samples_taken += 1;
    }

    ExitCode::SUCCESS
}
