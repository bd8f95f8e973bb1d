use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::scoring::{
    AgeBound, AgeGroupTable, Competitor, CompetitorId, Event, EventId, EventKind, EventStatus,
    Gender, GenderRestriction, MeasurementMetric, MeasurementNature, Participant, PointsTable,
    ResultEntry, ResultId, Rules, ScoredResult, Team, TeamId,
};

pub(super) fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid session date")
}

pub(super) fn teams() -> Vec<Team> {
    [
        ("red", "Red Dragons", "RED", "#c0392b"),
        ("blue", "Blue Herons", "BLU", "#2980b9"),
        ("green", "Green Foxes", "GRN", "#27ae60"),
        ("gold", "Gold Eagles", "GLD", "#f1c40f"),
    ]
    .into_iter()
    .map(|(id, name, abbreviation, color)| Team {
        id: TeamId::from(id),
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        color: color.to_string(),
    })
    .collect()
}

pub(super) fn competitor(
    id: &str,
    name: (&str, &str),
    born: (i32, u32, u32),
    gender: Gender,
    team: Option<&str>,
) -> Competitor {
    Competitor {
        id: CompetitorId::from(id),
        first_name: name.0.to_string(),
        last_name: name.1.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(born.0, born.1, born.2).expect("valid dob"),
        gender,
        team_id: team.map(TeamId::from),
    }
}

/// Ages are as of the 2025-03-14 session.
pub(super) fn roster() -> Vec<Competitor> {
    vec![
        competitor("c-ava", ("Ava", "Patel"), (2012, 1, 10), Gender::Female, Some("red")),
        competitor("c-ben", ("Ben", "Okafor"), (2011, 9, 2), Gender::Male, Some("blue")),
        competitor("c-cara", ("Cara", "Nguyen"), (2009, 12, 1), Gender::Female, Some("green")),
        competitor("c-dev", ("Dev", "Singh"), (2013, 3, 15), Gender::Male, Some("gold")),
        competitor("c-eli", ("Eli", "Brooks"), (2010, 3, 14), Gender::Male, None),
    ]
}

pub(super) fn event(kind: EventKind, gender: GenderRestriction, age_group: &str) -> Event {
    Event {
        id: EventId::from("e-100m"),
        title: "100m Sprint".to_string(),
        kind,
        gender,
        age_group: age_group.to_string(),
        measurement_nature: MeasurementNature::Time,
        measurement_metric: MeasurementMetric::Seconds,
        record: String::new(),
        record_holder: String::new(),
        is_record_broken: false,
        status: EventStatus::Pending,
    }
}

pub(super) fn timed_event(record: &str) -> Event {
    let mut event = event(EventKind::Individual, GenderRestriction::Mixed, "Open");
    event.record = record.to_string();
    event.record_holder = "Former Holder".to_string();
    event
}

pub(super) fn age_groups() -> AgeGroupTable {
    BTreeMap::from([
        ("U14".to_string(), AgeBound::Range(12, 14)),
        ("Senior".to_string(), AgeBound::Minimum(15)),
    ])
}

pub(super) fn rules(max_events_per_person: u32) -> Rules {
    Rules {
        max_events_per_person,
    }
}

pub(super) fn points_table() -> PointsTable {
    PointsTable {
        individual: BTreeMap::from([(1, 5), (2, 3), (3, 1)]),
        team: BTreeMap::from([(1, 10), (2, 6), (3, 2)]),
        bonus: BTreeMap::from([(1, 2), (2, 1)]),
    }
}

pub(super) fn entry(id: &str, participant_id: &str, position: i64) -> ResultEntry {
    ResultEntry {
        id: ResultId::from(id),
        participant_id: participant_id.to_string(),
        position,
    }
}

pub(super) fn individual_result(id: &str, competitor: &str, position: u32, points: u32) -> ScoredResult {
    ScoredResult {
        id: ResultId::from(id),
        participant: Participant::Individual(CompetitorId::from(competitor)),
        position,
        points,
        bonus_points: 0,
    }
}

pub(super) fn house_result(id: &str, team: &str, position: u32, points: u32) -> ScoredResult {
    ScoredResult {
        id: ResultId::from(id),
        participant: Participant::House(TeamId::from(team)),
        position,
        points,
        bonus_points: 0,
    }
}
