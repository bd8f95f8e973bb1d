use std::collections::BTreeMap;

use proptest::prelude::*;
use sportsday_engine::scoring::{
    aggregate_standings, allocate_points, stepped_ranks, EventKind, Participant, PointsTable,
    ResultEntry, ResultId, ScoredResult, Team, TeamId,
};

fn table_strategy() -> impl Strategy<Value = PointsTable> {
    (
        proptest::collection::btree_map(0u32..12, 0u32..50, 0..10),
        proptest::collection::btree_map(0u32..12, 0u32..50, 0..10),
        proptest::collection::btree_map(0u32..12, 0u32..10, 0..5),
    )
        .prop_map(|(individual, team, bonus)| PointsTable {
            individual,
            team,
            bonus,
        })
}

fn entries_strategy() -> impl Strategy<Value = Vec<ResultEntry>> {
    proptest::collection::vec(0i64..12, 0..20).prop_map(|positions| {
        positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| ResultEntry {
                id: ResultId(format!("r{index}")),
                participant_id: format!("p{index}"),
                position,
            })
            .collect()
    })
}

fn kind_strategy() -> impl Strategy<Value = EventKind> {
    prop_oneof![Just(EventKind::Individual), Just(EventKind::Team)]
}

proptest! {
    #[test]
    fn allocation_is_idempotent_and_order_preserving(
        entries in entries_strategy(),
        table in table_strategy(),
        kind in kind_strategy(),
    ) {
        let first = allocate_points(&entries, kind, &table).expect("valid entries");
        let second = allocate_points(&entries, kind, &table).expect("valid entries");

        prop_assert_eq!(&first, &second);
        let ids: Vec<&ResultId> = first.iter().map(|result| &result.id).collect();
        let expected: Vec<&ResultId> = entries.iter().map(|entry| &entry.id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn disqualification_always_scores_zero(
        entries in entries_strategy(),
        table in table_strategy(),
        kind in kind_strategy(),
    ) {
        let results = allocate_points(&entries, kind, &table).expect("valid entries");
        for result in results.iter().filter(|result| result.position == 0) {
            prop_assert_eq!(result.points, 0);
            prop_assert_eq!(result.bonus_points, 0);
        }
    }

    #[test]
    fn uniform_totals_share_first_place(team_count in 1usize..12, points in 0u32..100) {
        let teams: Vec<Team> = (0..team_count)
            .map(|index| Team {
                id: TeamId(format!("t{index}")),
                name: format!("Team {index}"),
                abbreviation: String::new(),
                color: String::new(),
            })
            .collect();
        let results: Vec<ScoredResult> = teams
            .iter()
            .map(|team| ScoredResult {
                id: ResultId(format!("h-{}", team.id)),
                participant: Participant::House(team.id.clone()),
                position: 1,
                points,
                bonus_points: 0,
            })
            .collect();

        let standings = aggregate_standings(&teams, &results, &[]);

        prop_assert!(standings.rank.values().all(|rank| *rank == 1));
    }

    #[test]
    fn ranks_count_the_teams_strictly_ahead(mut totals in proptest::collection::vec(0u32..20, 0..15)) {
        totals.sort_unstable_by(|left, right| right.cmp(left));
        let ranks = stepped_ranks(totals.iter().copied());

        for (total, rank) in totals.iter().zip(&ranks) {
            let ahead = totals.iter().filter(|other| *other > total).count() as u32;
            prop_assert_eq!(*rank, ahead + 1);
        }
    }
}

#[test]
fn tied_leaders_rank_one_one_three_four() {
    let teams: Vec<Team> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|id| Team {
            id: TeamId::from(id),
            name: id.to_uppercase(),
            abbreviation: String::new(),
            color: String::new(),
        })
        .collect();
    let results: Vec<ScoredResult> = [("a", 30), ("b", 30), ("c", 20), ("d", 10)]
        .into_iter()
        .map(|(id, points)| ScoredResult {
            id: ResultId(format!("h-{id}")),
            participant: Participant::House(TeamId::from(id)),
            position: 1,
            points,
            bonus_points: 0,
        })
        .collect();

    let standings = aggregate_standings(&teams, &results, &[]);

    let ranks: BTreeMap<&str, u32> = standings
        .rank
        .iter()
        .map(|(id, rank)| (id.0.as_str(), *rank))
        .collect();
    assert_eq!(
        ranks,
        BTreeMap::from([("a", 1), ("b", 1), ("c", 3), ("d", 4)])
    );
}
