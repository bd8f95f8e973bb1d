use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{AgeGroupTable, Rules};
use super::domain::{Competitor, CompetitorId, Event, EventKind, ScoredResult, Team};

/// Selectable entry offered to the operator when filling in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorOption {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

/// Whole years between `date_of_birth` and `on`. Birthdays after `on` count as age zero.
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Competitors that may be offered for `event`, in roster order.
///
/// Competitors who have already reached `rules.max_events_per_person` across
/// `existing_results` are kept but marked disabled. Individual results are the only
/// ones counted and team events never disable anyone.
pub fn filter_eligible(
    event: &Event,
    competitors: &[Competitor],
    rules: &Rules,
    age_groups: &AgeGroupTable,
    existing_results: &[ScoredResult],
    session_date: NaiveDate,
    allow_out_of_bounds: bool,
) -> Vec<CompetitorOption> {
    let entries = entries_per_competitor(existing_results);
    let bound = age_groups.get(&event.age_group).copied();

    let options: Vec<CompetitorOption> = competitors
        .iter()
        .filter(|competitor| event.gender.admits(competitor.gender))
        .filter(|competitor| match bound {
            Some(bound) => bound.admits(
                age_on(competitor.date_of_birth, session_date),
                allow_out_of_bounds,
            ),
            None => true,
        })
        .map(|competitor| {
            let entered = entries.get(&competitor.id).copied().unwrap_or(0);
            let disabled =
                event.kind == EventKind::Individual && entered >= rules.max_events_per_person;

            CompetitorOption {
                id: competitor.id.to_string(),
                label: competitor.full_name(),
                disabled,
            }
        })
        .collect();

    debug!(
        event = %event.id,
        offered = options.len(),
        disabled = options.iter().filter(|option| option.disabled).count(),
        "filtered eligible competitors"
    );

    options
}

/// Teams offered for a team event. The per-person cap does not apply to houses.
pub fn team_options(teams: &[Team]) -> Vec<CompetitorOption> {
    teams
        .iter()
        .map(|team| CompetitorOption {
            id: team.id.to_string(),
            label: team.name.clone(),
            disabled: false,
        })
        .collect()
}

fn entries_per_competitor(results: &[ScoredResult]) -> HashMap<&CompetitorId, u32> {
    let mut counts = HashMap::new();
    for competitor in results.iter().filter_map(|result| result.participant.competitor()) {
        *counts.entry(competitor).or_insert(0) += 1;
    }
    counts
}
