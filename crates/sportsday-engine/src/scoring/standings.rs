use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Competitor, CompetitorId, Participant, ScoredResult, Team, TeamId};

/// House totals recomputed from the full result set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Standings {
    pub points: BTreeMap<TeamId, u32>,
    pub bonus_points: BTreeMap<TeamId, u32>,
    pub disqualified: BTreeMap<TeamId, u32>,
    pub rank: BTreeMap<TeamId, u32>,
}

/// Leaderboard row for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingEntry {
    pub rank: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub points: u32,
    pub bonus_points: u32,
    pub disqualified: u32,
}

impl Standings {
    /// Rows ordered by rank; tied houses keep the order they were given in.
    pub fn leaderboard(&self, teams: &[Team]) -> Vec<StandingEntry> {
        let mut rows: Vec<StandingEntry> = teams
            .iter()
            .filter_map(|team| {
                let rank = *self.rank.get(&team.id)?;
                Some(StandingEntry {
                    rank,
                    team_id: team.id.clone(),
                    team_name: team.name.clone(),
                    points: self.points.get(&team.id).copied().unwrap_or(0),
                    bonus_points: self.bonus_points.get(&team.id).copied().unwrap_or(0),
                    disqualified: self.disqualified.get(&team.id).copied().unwrap_or(0),
                })
            })
            .collect();
        rows.sort_by_key(|row| row.rank);
        rows
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    points: u32,
    bonus_points: u32,
    disqualified: u32,
}

/// Rolls every result up into its house and ranks the houses.
///
/// House results count for the named team; individual results count for the
/// competitor's team. Ranking shares a place between equal totals and then skips,
/// so totals `[30, 30, 20, 10]` rank `[1, 1, 3, 4]`.
pub fn aggregate_standings(
    teams: &[Team],
    results: &[ScoredResult],
    competitors: &[Competitor],
) -> Standings {
    let membership: HashMap<&CompetitorId, &TeamId> = competitors
        .iter()
        .filter_map(|competitor| {
            competitor
                .team_id
                .as_ref()
                .map(|team_id| (&competitor.id, team_id))
        })
        .collect();

    let mut totals: HashMap<&TeamId, Totals> = teams
        .iter()
        .map(|team| (&team.id, Totals::default()))
        .collect();

    for result in results {
        let owner = match &result.participant {
            Participant::House(team_id) => Some(team_id),
            Participant::Individual(competitor_id) => membership.get(competitor_id).copied(),
        };

        let Some(entry) = owner.and_then(|team_id| totals.get_mut(team_id)) else {
            continue;
        };
        entry.points += result.points;
        entry.bonus_points += result.bonus_points;
        if result.is_disqualified() {
            entry.disqualified += 1;
        }
    }

    let mut ordered: Vec<(&TeamId, u32)> = teams
        .iter()
        .map(|team| (&team.id, totals.get(&team.id).map_or(0, |t| t.points)))
        .collect();
    ordered.sort_by(|left, right| right.1.cmp(&left.1));

    let ranks = stepped_ranks(ordered.iter().map(|(_, points)| *points));

    let mut standings = Standings::default();
    for ((team_id, _), rank) in ordered.into_iter().zip(ranks) {
        let team_totals = totals.get(team_id).copied().unwrap_or_default();
        standings.points.insert(team_id.clone(), team_totals.points);
        standings
            .bonus_points
            .insert(team_id.clone(), team_totals.bonus_points);
        standings
            .disqualified
            .insert(team_id.clone(), team_totals.disqualified);
        standings.rank.insert(team_id.clone(), rank);
    }

    debug!(teams = standings.rank.len(), results = results.len(), "recomputed standings");

    standings
}

/// Ranks an already descending sequence of totals. A total equal to the one before it
/// repeats that rank; otherwise it takes the running position, which advances by one
/// for every entry.
pub fn stepped_ranks<I>(sorted_totals: I) -> Vec<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut ranks: Vec<u32> = Vec::new();
    let mut previous: Option<u32> = None;

    for (index, total) in sorted_totals.into_iter().enumerate() {
        let position = index as u32 + 1;
        let rank = match (previous, ranks.last()) {
            (Some(prior), Some(prior_rank)) if prior == total => *prior_rank,
            _ => position,
        };
        ranks.push(rank);
        previous = Some(total);
    }

    ranks
}
