// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

use anyhow::Result;
use clap::{ArgAction, Args, Parser};
use colored::Colorize;
use env_logger::Builder;
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use zacros_rs::prelude::*;

#[derive(Debug, Args)]
pub struct ModelParams {
    /// Ratio of pre-exponential factors of CO adsorption and desorption.
    #[arg(long, default_value_t = 1.0)]
    pub b_co: f64,

    /// Ratio of pre-exponential factors of O2 adsorption and desorption.
    #[arg(long, default_value_t = 1.25)]
    pub b_o2: f64,

    /// Pre-exponential factor of CO oxidation.
    #[arg(long, default_value_t = 1.0)]
    pub a_oxi: f64,

    /// Number of neighbors of each site.
    #[arg(long, default_value_t = 6)]
    pub coordination: usize,
}

/// zacros-lh: Langmuir-Hinshelwood steady states
#[derive(Debug, Parser)]
#[command(name = "zacros-lh")]
#[command(
    version,
    about = "Analytical coverages and CO2 production of the Langmuir-Hinshelwood CO oxidation model."
)]
pub struct Cli {
    #[command(flatten, next_help_heading = "Model parameters")]
    model: ModelParams,

    /// Number of CO molar fractions evenly spaced over [0, 1].
    #[arg(short, long, default_value_t = 21)]
    points: usize,

    /// Write the energetics input of the model into this file.
    #[arg(short, long, value_name = "FILE")]
    energetics: Option<PathBuf>,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let model = LangmuirHinshelwood::new(cli.model.b_co, cli.model.b_o2, cli.model.a_oxi)?
        .with_coordination(cli.model.coordination);

    let stdout = std::io::stdout();
    model.write_summary(&mut stdout.lock(), cli.points)?;

    println!();
    println!(
        "{} {:.6}",
        "x_CO with equal coverages:".cyan(),
        model.equal_coverage_fraction()
    );
    println!(
        "{} {:.6}",
        "x_CO with maximal TOF_CO2:".cyan(),
        model.max_tof_fraction()
    );

    if let Some(path) = cli.energetics {
        model.cluster_expansion().write_energetics(&path)?;
        info!("Energetics written into `{}`.", path.display());
    }

    Ok(())
}
