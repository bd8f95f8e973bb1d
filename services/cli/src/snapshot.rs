use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sportsday_engine::error::AppError;
use sportsday_engine::scoring::{Competitor, Event, EventId, ScoredResult, Team};

/// Exported state of a sports-day session: houses, roster and every event with its stored results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SessionSnapshot {
    #[serde(default)]
    pub(crate) teams: Vec<Team>,
    #[serde(default)]
    pub(crate) competitors: Vec<Competitor>,
    #[serde(default)]
    pub(crate) events: Vec<EventSheet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct EventSheet {
    pub(crate) event: Event,
    #[serde(default)]
    pub(crate) results: Vec<ScoredResult>,
}

impl SessionSnapshot {
    pub(crate) fn from_path(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub(crate) fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub(crate) fn all_results(&self) -> Vec<ScoredResult> {
        self.events
            .iter()
            .flat_map(|sheet| sheet.results.iter().cloned())
            .collect()
    }

    pub(crate) fn sheet(&self, id: &EventId) -> Result<&EventSheet, AppError> {
        self.events
            .iter()
            .find(|sheet| &sheet.event.id == id)
            .ok_or_else(|| AppError::UnknownEvent(id.clone()))
    }
}
