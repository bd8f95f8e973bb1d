use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::scoring::{AgeGroupTable, PointsTable, Rules};

/// Operator-maintained scoring rules for a session, stored as JSON.
///
/// ```json
/// {
///   "points": { "individual": { "1": 10, "2": 8 }, "team": { "1": 20 }, "bonus": { "1": 3 } },
///   "age_groups": { "U14": [12, 14], "Open": 11 },
///   "rules": { "max_events_per_person": 4 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub points: PointsTable,
    #[serde(default)]
    pub age_groups: AgeGroupTable,
    #[serde(default)]
    pub rules: Rules,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points: PointsTable::standard(),
            age_groups: AgeGroupTable::new(),
            rules: Rules::default(),
        }
    }
}

impl ScoringConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::ScoringFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_reader(reader)
            .map_err(|source| ConfigError::ScoringFormat { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would silently exclude everyone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.max_events_per_person == 0 {
            return Err(ConfigError::ZeroEventCap);
        }

        for (label, bound) in &self.age_groups {
            if let crate::scoring::AgeBound::Range(min, max) = *bound {
                if min > max {
                    return Err(ConfigError::InvalidAgeGroup {
                        label: label.clone(),
                        min,
                        max,
                    });
                }
            }
        }

        Ok(())
    }
}
