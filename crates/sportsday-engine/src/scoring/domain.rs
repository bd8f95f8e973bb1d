use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::records::RecordOutcome;

/// Identifier wrapper for registered competitors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompetitorId(pub String);

/// Identifier wrapper for teams (houses).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

/// Identifier of a stored result row, used to match re-submissions against persisted rows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResultId(pub String);

macro_rules! display_id {
    ($($name:ident),+) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

display_id!(CompetitorId, TeamId, EventId, ResultId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Gender restriction placed on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderRestriction {
    Male,
    Female,
    Mixed,
}

impl GenderRestriction {
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            GenderRestriction::Mixed => true,
            GenderRestriction::Male => gender == Gender::Male,
            GenderRestriction::Female => gender == Gender::Female,
        }
    }
}

/// A student registered for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

impl Competitor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// A competing house. Points from its members and its own team entries roll up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Individual,
    Team,
}

impl EventKind {
    pub const fn label(self) -> &'static str {
        match self {
            EventKind::Individual => "individual",
            EventKind::Team => "team",
        }
    }
}

/// Comparison family for a performance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementNature {
    Time,
    Height,
    Length,
    Score,
}

impl MeasurementNature {
    /// Lower values win for timed events; everything else rewards the larger value.
    pub const fn lower_is_better(self) -> bool {
        matches!(self, MeasurementNature::Time)
    }

    pub const fn label(self) -> &'static str {
        match self {
            MeasurementNature::Time => "time",
            MeasurementNature::Height => "height",
            MeasurementNature::Length => "length",
            MeasurementNature::Score => "score",
        }
    }
}

impl fmt::Display for MeasurementNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit family a performance is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMetric {
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
    #[serde(alias = "meters")]
    Metres,
    #[serde(alias = "centimeters")]
    Centimetres,
    Points,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Pending,
    Complete,
}

/// A contested event along with its standing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub kind: EventKind,
    pub gender: GenderRestriction,
    pub age_group: String,
    pub measurement_nature: MeasurementNature,
    #[serde(default)]
    pub measurement_metric: MeasurementMetric,
    /// Empty when no record has been set yet.
    #[serde(default)]
    pub record: String,
    #[serde(default)]
    pub record_holder: String,
    #[serde(default)]
    pub is_record_broken: bool,
    #[serde(default)]
    pub status: EventStatus,
}

impl Event {
    pub fn has_record(&self) -> bool {
        !self.record.trim().is_empty()
    }

    /// Returns a copy of the event with a broken record applied. Outcomes that did not
    /// break the record leave the stored record untouched.
    pub fn apply_record(&self, outcome: &RecordOutcome) -> Event {
        let mut event = self.clone();
        if !outcome.is_broken {
            return event;
        }

        if let Some(record) = &outcome.new_record {
            event.record = record.clone();
        }
        event.record_holder = outcome.record_holder.clone().unwrap_or_default();
        event.is_record_broken = true;
        event
    }
}

/// Raw finishing position captured for one participant. Position `0` marks a disqualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub id: ResultId,
    #[serde(default)]
    pub participant_id: String,
    pub position: i64,
}

/// Who a result belongs to: a competitor for individual events, a house for team events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "participant_type", content = "participant_id", rename_all = "snake_case")]
pub enum Participant {
    Individual(CompetitorId),
    House(TeamId),
}

impl Participant {
    pub fn for_kind(kind: EventKind, id: &str) -> Self {
        match kind {
            EventKind::Individual => Participant::Individual(CompetitorId(id.to_string())),
            EventKind::Team => Participant::House(TeamId(id.to_string())),
        }
    }

    pub fn competitor(&self) -> Option<&CompetitorId> {
        match self {
            Participant::Individual(id) => Some(id),
            Participant::House(_) => None,
        }
    }

    pub fn team(&self) -> Option<&TeamId> {
        match self {
            Participant::House(id) => Some(id),
            Participant::Individual(_) => None,
        }
    }
}

/// Point-bearing result produced by the allocator and stored by the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub id: ResultId,
    pub participant: Participant,
    pub position: u32,
    pub points: u32,
    pub bonus_points: u32,
}

impl ScoredResult {
    pub fn is_disqualified(&self) -> bool {
        self.position == 0
    }
}
