use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use sportsday_engine::config::{parse_session_date, ScoringConfig};
use sportsday_engine::error::AppError;
use sportsday_engine::scoring::{
    aggregate_standings, allocate_points, competitor_totals, evaluate_record, filter_eligible,
    format_time, parse_time, plan_upsert, team_options, Event, EventId, EventKind, MeasurementNature,
    ResultEntry, ScoredResult,
};
use tracing::info;

use crate::snapshot::SessionSnapshot;

#[derive(Args, Debug)]
pub(crate) struct SnapshotArgs {
    /// Session snapshot exported by the application (JSON)
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    Individual,
    Team,
}

impl From<KindArg> for EventKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Individual => EventKind::Individual,
            KindArg::Team => EventKind::Team,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AllocateArgs {
    /// Raw result entries for one event (JSON array of {id, participant_id, position})
    #[arg(long)]
    pub(crate) entries: PathBuf,
    /// Kind of event the entries belong to
    #[arg(long, value_enum)]
    pub(crate) kind: KindArg,
    /// Results already stored for the event; prints an upsert plan instead of the results
    #[arg(long)]
    pub(crate) stored: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct EligibleArgs {
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Event identifier to fill
    #[arg(long)]
    pub(crate) event: String,
    /// Date ages are measured against (YYYY-MM-DD); defaults to SPORTSDAY_SESSION_DATE or today
    #[arg(long, value_parser = parse_date)]
    pub(crate) session_date: Option<NaiveDate>,
    /// Waive age-group lower bounds for manual entry
    #[arg(long)]
    pub(crate) allow_out_of_bounds: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecordArgs {
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    #[arg(long)]
    pub(crate) event: String,
    /// Best performance submitted for the event, in the event's notation
    #[arg(long)]
    pub(crate) best_score: String,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_session_date(raw).map_err(|err| err.to_string())
}

pub(crate) fn standings_report(snapshot: &SessionSnapshot) -> String {
    let results = snapshot.all_results();
    let standings = aggregate_standings(&snapshot.teams, &results, &snapshot.competitors);

    let mut out = String::from("House standings\n");
    for row in standings.leaderboard(&snapshot.teams) {
        let _ = writeln!(
            out,
            "{:>3}. {} - {} pts, {} VLP, {} DQ",
            row.rank, row.team_name, row.points, row.bonus_points, row.disqualified
        );
    }
    out
}

pub(crate) fn tally_report(snapshot: &SessionSnapshot) -> String {
    let totals = competitor_totals(&snapshot.all_results());

    let mut rows: Vec<(String, u32, u32, u32)> = snapshot
        .competitors
        .iter()
        .filter_map(|competitor| {
            totals.get(&competitor.id).map(|tally| {
                (
                    competitor.full_name(),
                    tally.points,
                    tally.bonus_points,
                    tally.events,
                )
            })
        })
        .collect();
    rows.sort_by(|left, right| right.1.cmp(&left.1).then(right.2.cmp(&left.2)));

    let mut out = String::from("Individual totals\n");
    for (name, points, bonus, events) in rows {
        let _ = writeln!(out, "- {name}: {points} pts, {bonus} VLP over {events} event(s)");
    }
    out
}

pub(crate) fn allocate_report(
    args: &AllocateArgs,
    scoring: &ScoringConfig,
) -> Result<String, AppError> {
    let entries: Vec<ResultEntry> =
        serde_json::from_reader(BufReader::new(File::open(&args.entries)?))?;
    let allocated = allocate_points(&entries, args.kind.into(), &scoring.points)?;

    let rendered = match &args.stored {
        Some(path) => {
            let stored: Vec<ScoredResult> =
                serde_json::from_reader(BufReader::new(File::open(path)?))?;
            let plan = plan_upsert(allocated, &stored);
            info!(
                inserts = plan.inserts.len(),
                updates = plan.updates.len(),
                unchanged = plan.unchanged.len(),
                "planned result upsert"
            );
            serde_json::to_string_pretty(&plan)?
        }
        None => serde_json::to_string_pretty(&allocated)?,
    };
    Ok(rendered)
}

pub(crate) fn eligible_report(
    snapshot: &SessionSnapshot,
    event_id: &str,
    scoring: &ScoringConfig,
    session_date: NaiveDate,
    allow_out_of_bounds: bool,
) -> Result<String, AppError> {
    let sheet = snapshot.sheet(&EventId::from(event_id))?;
    let event = &sheet.event;

    let options = match event.kind {
        EventKind::Team => team_options(&snapshot.teams),
        EventKind::Individual => filter_eligible(
            event,
            &snapshot.competitors,
            &scoring.rules,
            &scoring.age_groups,
            &snapshot.all_results(),
            session_date,
            allow_out_of_bounds,
        ),
    };

    let mut out = format!(
        "Eligible for {} ({}, {} as of {})\n",
        event.title,
        event.kind.label(),
        event.age_group,
        session_date
    );
    if options.is_empty() {
        out.push_str("- nobody\n");
    }
    for option in options {
        let marker = if option.disabled {
            " [event limit reached]"
        } else {
            ""
        };
        let _ = writeln!(out, "- {} ({}){}", option.label, option.id, marker);
    }
    Ok(out)
}

pub(crate) fn record_report(
    snapshot: &SessionSnapshot,
    event_id: &str,
    best_score: &str,
) -> Result<String, AppError> {
    let sheet = snapshot.sheet(&EventId::from(event_id))?;
    let event = &sheet.event;

    let outcome = evaluate_record(
        best_score,
        &sheet.results,
        event,
        &snapshot.competitors,
        &snapshot.teams,
    )?;
    let updated = event.apply_record(&outcome);

    let mut out = format!("{}: {}\n", event.title, outcome.summary());
    let standing = if updated.has_record() {
        display_performance(&updated)
    } else {
        "none".to_string()
    };
    let _ = writeln!(out, "Standing record: {standing}");
    if !updated.record_holder.is_empty() {
        let _ = writeln!(out, "Holder: {}", updated.record_holder);
    }
    Ok(out)
}

fn display_performance(event: &Event) -> String {
    if event.measurement_nature != MeasurementNature::Time {
        return event.record.clone();
    }
    parse_time(&event.record)
        .map(|seconds| format_time(seconds, event.measurement_metric))
        .unwrap_or_else(|_| event.record.clone())
}
