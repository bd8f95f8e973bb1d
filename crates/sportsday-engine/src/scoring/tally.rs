use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CompetitorId, ScoredResult};

/// Individual totals across the session, used for the VLP leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompetitorTally {
    pub points: u32,
    pub bonus_points: u32,
    pub events: u32,
    pub disqualified: u32,
}

pub fn competitor_totals(results: &[ScoredResult]) -> BTreeMap<CompetitorId, CompetitorTally> {
    let mut totals: BTreeMap<CompetitorId, CompetitorTally> = BTreeMap::new();

    for result in results {
        let Some(competitor) = result.participant.competitor() else {
            continue;
        };
        let tally = totals.entry(competitor.clone()).or_default();
        tally.points += result.points;
        tally.bonus_points += result.bonus_points;
        tally.events += 1;
        if result.is_disqualified() {
            tally.disqualified += 1;
        }
    }

    totals
}
