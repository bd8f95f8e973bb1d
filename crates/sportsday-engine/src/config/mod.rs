mod scoring;

pub use scoring::ScoringConfig;

use chrono::NaiveDate;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine's command-line front end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub session: SessionConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let scoring_config = env::var("SPORTSDAY_SCORING_CONFIG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let session_date = env::var("SPORTSDAY_SESSION_DATE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_session_date(&value))
            .transpose()?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            session: SessionConfig {
                scoring_config,
                session_date,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where scoring rules come from and which day ages are measured against.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub scoring_config: Option<PathBuf>,
    pub session_date: Option<NaiveDate>,
}

impl SessionConfig {
    /// Loads the configured scoring file, or the built-in defaults when none is set.
    pub fn scoring(&self) -> Result<ScoringConfig, ConfigError> {
        match &self.scoring_config {
            Some(path) => ScoringConfig::from_path(path),
            None => Ok(ScoringConfig::default()),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub fn parse_session_date(raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|source| {
        ConfigError::InvalidSessionDate {
            value: raw.to_string(),
            source,
        }
    })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSessionDate {
        value: String,
        source: chrono::ParseError,
    },
    ScoringFile {
        path: PathBuf,
        source: std::io::Error,
    },
    ScoringFormat {
        source: serde_json::Error,
    },
    InvalidAgeGroup {
        label: String,
        min: u32,
        max: u32,
    },
    ZeroEventCap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSessionDate { value, .. } => write!(
                f,
                "SPORTSDAY_SESSION_DATE '{}' must be formatted as YYYY-MM-DD",
                value
            ),
            ConfigError::ScoringFile { path, .. } => {
                write!(f, "unable to read scoring config {}", path.display())
            }
            ConfigError::ScoringFormat { source } => {
                write!(f, "scoring config is not valid JSON: {}", source)
            }
            ConfigError::InvalidAgeGroup { label, min, max } => write!(
                f,
                "age group '{}' has an empty range [{}, {}]",
                label, min, max
            ),
            ConfigError::ZeroEventCap => {
                write!(f, "rules.max_events_per_person must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidSessionDate { source, .. } => Some(source),
            ConfigError::ScoringFile { source, .. } => Some(source),
            ConfigError::ScoringFormat { source } => Some(source),
            ConfigError::InvalidAgeGroup { .. } | ConfigError::ZeroEventCap => None,
        }
    }
}
