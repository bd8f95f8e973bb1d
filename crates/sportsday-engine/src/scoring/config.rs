use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::EventKind;

/// Place-indexed points awards. Places are 1-based; unconfigured places score zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointsTable {
    #[serde(default)]
    pub individual: BTreeMap<u32, u32>,
    #[serde(default)]
    pub team: BTreeMap<u32, u32>,
    /// VLP awards, looked up for both event kinds.
    #[serde(default)]
    pub bonus: BTreeMap<u32, u32>,
}

impl PointsTable {
    pub fn points_for(&self, kind: EventKind, place: u32) -> u32 {
        let table = match kind {
            EventKind::Individual => &self.individual,
            EventKind::Team => &self.team,
        };
        table.get(&place).copied().unwrap_or(0)
    }

    pub fn bonus_for(&self, place: u32) -> u32 {
        self.bonus.get(&place).copied().unwrap_or(0)
    }

    /// Conventional sports-day scale: eight scoring places, relays worth double, VLP for the podium.
    pub fn standard() -> Self {
        let individual: BTreeMap<u32, u32> = [10, 8, 6, 5, 4, 3, 2, 1]
            .into_iter()
            .enumerate()
            .map(|(index, points)| (index as u32 + 1, points))
            .collect();
        let team = individual
            .iter()
            .map(|(place, points)| (*place, points * 2))
            .collect();
        let bonus = BTreeMap::from([(1, 3), (2, 2), (3, 1)]);

        Self {
            individual,
            team,
            bonus,
        }
    }
}

/// Age bound attached to an age-group label: either a minimum age or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeBound {
    Minimum(u32),
    Range(u32, u32),
}

impl AgeBound {
    /// The override waives lower bounds only; range upper bounds always apply.
    pub fn admits(self, age: u32, allow_out_of_bounds: bool) -> bool {
        match (self, allow_out_of_bounds) {
            (AgeBound::Minimum(_), true) => true,
            (AgeBound::Minimum(min), false) => age >= min,
            (AgeBound::Range(_, max), true) => age <= max,
            (AgeBound::Range(min, max), false) => min <= age && age <= max,
        }
    }
}

pub type AgeGroupTable = BTreeMap<String, AgeBound>;

/// Session-wide entry rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub max_events_per_person: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_events_per_person: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_places_score_zero() {
        let table = PointsTable::standard();
        assert_eq!(table.points_for(EventKind::Individual, 1), 10);
        assert_eq!(table.points_for(EventKind::Team, 1), 20);
        assert_eq!(table.points_for(EventKind::Individual, 9), 0);
        assert_eq!(table.bonus_for(4), 0);
    }

    #[test]
    fn age_bounds_deserialize_from_number_or_pair() {
        let table: AgeGroupTable =
            serde_json::from_str(r#"{ "U14": [12, 14], "Open": 11 }"#).expect("valid table");
        assert_eq!(table["U14"], AgeBound::Range(12, 14));
        assert_eq!(table["Open"], AgeBound::Minimum(11));
    }

    #[test]
    fn override_waives_only_lower_bounds() {
        let range = AgeBound::Range(12, 14);
        assert!(!range.admits(11, false));
        assert!(range.admits(11, true));
        assert!(!range.admits(15, true));

        let minimum = AgeBound::Minimum(16);
        assert!(!minimum.admits(15, false));
        assert!(minimum.admits(9, true));
    }
}
