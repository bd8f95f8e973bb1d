use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use sportsday_engine::config::{AppConfig, ScoringConfig};
use sportsday_engine::error::AppError;
use sportsday_engine::telemetry;
use tracing::debug;

use crate::commands::{
    allocate_report, eligible_report, record_report, standings_report, tally_report,
    AllocateArgs, EligibleArgs, RecordArgs, SnapshotArgs,
};
use crate::snapshot::SessionSnapshot;

#[derive(Parser, Debug)]
#[command(
    name = "sportsday",
    about = "Score events, check eligibility and rank houses for a school sports day",
    version
)]
struct Cli {
    /// Scoring configuration (JSON); overrides SPORTSDAY_SCORING_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the house leaderboard for a session snapshot
    Standings(SnapshotArgs),
    /// Print individual points and VLP totals
    Tally(SnapshotArgs),
    /// Allocate points for one event's raw finishing positions
    Allocate(AllocateArgs),
    /// List competitors who may be entered into an event
    Eligible(EligibleArgs),
    /// Check whether a best performance breaks an event record
    Record(RecordArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let scoring = match &cli.config {
        Some(path) => ScoringConfig::from_path(path)?,
        None => config.session.scoring()?,
    };
    debug!(?config.environment, "scoring configuration loaded");

    let output = match cli.command {
        Command::Standings(args) => standings_report(&SessionSnapshot::from_path(&args.snapshot)?),
        Command::Tally(args) => tally_report(&SessionSnapshot::from_path(&args.snapshot)?),
        Command::Allocate(args) => allocate_report(&args, &scoring)?,
        Command::Eligible(args) => {
            let snapshot = SessionSnapshot::from_path(&args.snapshot)?;
            let session_date = args
                .session_date
                .or(config.session.session_date)
                .unwrap_or_else(|| Local::now().date_naive());
            eligible_report(
                &snapshot,
                &args.event,
                &scoring,
                session_date,
                args.allow_out_of_bounds,
            )?
        }
        Command::Record(args) => {
            let snapshot = SessionSnapshot::from_path(&args.snapshot)?;
            record_report(&snapshot, &args.event, &args.best_score)?
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
