use crate::config::ConfigError;
use crate::scoring::{EventId, MeasurementNature, ResultId};
use crate::telemetry::TelemetryError;
use std::fmt;

/// Caller contract violations detected by the scoring engine.
///
/// Every variant names the offending field so the application layer can point the
/// operator at the bad row. Nothing is returned alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("entry {entry}: position must be a non-negative place, got {position}")]
    InvalidPosition { entry: ResultId, position: i64 },
    #[error("entry {entry}: participant_id is required")]
    MissingParticipant { entry: ResultId },
    #[error("{field} '{value}' is not a valid {nature} value: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: String,
        nature: MeasurementNature,
        reason: String,
    },
}

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Engine(EngineError),
    Json(serde_json::Error),
    UnknownEvent(EventId),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Engine(err) => write!(f, "scoring error: {}", err),
            AppError::Json(err) => write!(f, "invalid JSON input: {}", err),
            AppError::UnknownEvent(id) => write!(f, "event '{}' not found in snapshot", id),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Engine(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::UnknownEvent(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<EngineError> for AppError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
