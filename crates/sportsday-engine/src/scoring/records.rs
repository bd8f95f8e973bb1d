use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{Competitor, Event, Participant, ScoredResult, Team};
use super::measurement::Performance;
use crate::error::EngineError;

/// Decision reported back to the caller after comparing a best score with the standing record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub is_broken: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_holder: Option<String>,
}

impl RecordOutcome {
    pub fn unbroken() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        match (&self.new_record, &self.record_holder) {
            (Some(record), Some(holder)) if !holder.is_empty() => {
                format!("new record {record} set by {holder}")
            }
            (Some(record), _) => format!("new record {record} (holder unknown)"),
            _ => "record stands".to_string(),
        }
    }
}

/// Compares `best_score` against `event.record` using the event's measurement nature.
///
/// An event without a record accepts any valid score as the first record. The new holder
/// is taken from the first submitted result at position 1; when none can be resolved the
/// record still updates with an empty holder name.
pub fn evaluate_record(
    best_score: &str,
    results: &[ScoredResult],
    event: &Event,
    competitors: &[Competitor],
    teams: &[Team],
) -> Result<RecordOutcome, EngineError> {
    let nature = event.measurement_nature;
    let candidate = Performance::parse(nature, "best_score", best_score)?;

    let improved = if event.has_record() {
        let standing = Performance::parse(nature, "record", &event.record)?;
        candidate.improves_on(&standing)
    } else {
        true
    };

    if !improved {
        return Ok(RecordOutcome::unbroken());
    }

    let holder = resolve_holder(results, competitors, teams).unwrap_or_else(|| {
        warn!(event = %event.id, "record broken but no winner could be resolved");
        String::new()
    });
    let new_record = best_score.trim().to_string();

    info!(
        event = %event.id,
        previous = %event.record,
        record = %new_record,
        holder = %holder,
        "event record broken"
    );

    Ok(RecordOutcome {
        is_broken: true,
        new_record: Some(new_record),
        record_holder: Some(holder),
    })
}

fn resolve_holder(
    results: &[ScoredResult],
    competitors: &[Competitor],
    teams: &[Team],
) -> Option<String> {
    let winner = results.iter().find(|result| result.position == 1)?;

    match &winner.participant {
        Participant::Individual(id) => competitors
            .iter()
            .find(|competitor| &competitor.id == id)
            .map(Competitor::full_name),
        Participant::House(id) => teams
            .iter()
            .find(|team| &team.id == id)
            .map(|team| team.name.clone()),
    }
}
