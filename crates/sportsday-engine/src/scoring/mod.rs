//! Competition scoring for a sports-day session.
//!
//! Every operation here is a pure function over the collections it is handed: the
//! application layer owns persistence and re-runs [`aggregate_standings`] whenever the
//! stored results, houses or roster change.

mod config;
pub mod domain;
mod eligibility;
pub mod measurement;
mod points;
mod records;
mod standings;
mod tally;
mod upsert;

#[cfg(test)]
mod tests;

pub use config::{AgeBound, AgeGroupTable, PointsTable, Rules};
pub use domain::{
    Competitor, CompetitorId, Event, EventId, EventKind, EventStatus, Gender, GenderRestriction,
    MeasurementMetric, MeasurementNature, Participant, ResultEntry, ResultId, ScoredResult, Team,
    TeamId,
};
pub use eligibility::{age_on, filter_eligible, team_options, CompetitorOption};
pub use measurement::{format_time, parse_time, Performance};
pub use points::allocate_points;
pub use records::{evaluate_record, RecordOutcome};
pub use standings::{aggregate_standings, stepped_ranks, StandingEntry, Standings};
pub use tally::{competitor_totals, CompetitorTally};
pub use upsert::{plan_upsert, UpsertPlan};
