// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod commands;
mod logging;
mod output;

use clap::{error::ErrorKind, Parser, Subcommand};
use emissia_core::ExitCode;
use emissia_engine::{
    DEFAULT_COUNTRY, DEFAULT_DISPOSAL_METHOD, DEFAULT_WASTE_TYPE, DEFAULT_WATER_TYPE,
};
use emissia_reporting::DEFAULT_OFFSET_PERCENTAGE;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use crate::output::{emit_error, CliError, OutputMode};

pub const CRATE_NAME: &str = "emissia-cli";

#[derive(Parser)]
#[command(name = "emissia", version)]
#[command(about = "Emission factor validation and CO2e calculation CLI")]
#[command(
    after_help = "Environment:\n  EMISSIA_FACTORS_DIR   Factor document directory\n  EMISSIA_LOG_LEVEL     Log filter override (then RUST_LOG)\n  EMISSIA_LOG_JSON      Emit logs as JSON lines"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true)]
    factors_dir: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one bill line into an emission record.
    Calculate {
        #[arg(long)]
        bill_type: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        unit: String,
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        fuel_type: Option<String>,
        #[arg(long, default_value = DEFAULT_WATER_TYPE)]
        water_type: String,
        #[arg(long, default_value = DEFAULT_WASTE_TYPE)]
        waste_type: String,
        #[arg(long, default_value = DEFAULT_DISPOSAL_METHOD)]
        disposal_method: String,
    },
    Factors {
        #[command(subcommand)]
        command: FactorsCommand,
    },
    /// Aggregate a JSON array of emission records.
    Summarize {
        #[arg(long)]
        records: PathBuf,
    },
    Compliance {
        #[arg(long)]
        records: PathBuf,
        #[arg(long)]
        bills: u64,
        #[arg(long)]
        validated_bills: u64,
    },
    Offsets {
        #[arg(long)]
        records: PathBuf,
        #[arg(long)]
        project_type: String,
        #[arg(long, default_value_t = DEFAULT_OFFSET_PERCENTAGE)]
        offset_percentage: f64,
    },
}

#[derive(Subcommand)]
enum FactorsCommand {
    /// Load every factor document and report what was found.
    Validate {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                let mut usage = CliError::usage("invalid command line arguments");
                usage.machine = usage.machine.with_detail("error", &err.to_string());
                return Err(usage);
            }
        },
    };
    logging::init_tracing(cli.log_json);
    let output_mode = OutputMode { json: cli.json };

    let command = cli
        .command
        .ok_or_else(|| CliError::usage("missing command; see --help"))?;
    let factors_dir = cli.factors_dir;

    match command {
        Commands::Calculate {
            bill_type,
            amount,
            unit,
            country,
            region,
            fuel_type,
            water_type,
            waste_type,
            disposal_method,
        } => commands::run_calculate(
            factors_dir.as_deref(),
            &commands::CalculateArgs {
                bill_type,
                amount,
                unit,
                country,
                region,
                fuel_type,
                water_type,
                waste_type,
                disposal_method,
            },
            output_mode,
        ),
        Commands::Factors { command } => match command {
            FactorsCommand::Validate { dir } => {
                let dir = dir.as_deref().or(factors_dir.as_deref());
                commands::run_factors_validate(dir, output_mode)
            }
        },
        Commands::Summarize { records } => commands::run_summarize(&records, output_mode),
        Commands::Compliance {
            records,
            bills,
            validated_bills,
        } => commands::run_compliance(&records, bills, validated_bills, output_mode),
        Commands::Offsets {
            records,
            project_type,
            offset_percentage,
        } => commands::run_offsets(&records, &project_type, offset_percentage, output_mode),
    }
}
