//! Performance notation shared by result entry and record evaluation.
//!
//! Distances, heights and scores are plain decimals. Times use a colon separated
//! `[[DD:]HH:]MM:SS[.ss]` notation where leading components may be dropped, so a sprint
//! can be written as `12.10` and a cross-country run as `14:05.30`.

use super::domain::{MeasurementMetric, MeasurementNature};
use crate::error::EngineError;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// A parsed performance value that knows which direction counts as better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    pub nature: MeasurementNature,
    pub value: f64,
}

impl Performance {
    pub fn parse(nature: MeasurementNature, field: &'static str, raw: &str) -> Result<Self, EngineError> {
        let value = match nature {
            MeasurementNature::Time => time_seconds(raw),
            MeasurementNature::Height | MeasurementNature::Length => decimal(raw, false),
            MeasurementNature::Score => decimal(raw, true),
        }
        .map_err(|reason| EngineError::InvalidMeasurement {
            field,
            value: raw.to_string(),
            nature,
            reason,
        })?;

        Ok(Self { nature, value })
    }

    /// Strict improvement: equalling a record never breaks it.
    pub fn improves_on(&self, standing: &Performance) -> bool {
        if self.nature.lower_is_better() {
            self.value < standing.value
        } else {
            self.value > standing.value
        }
    }
}

/// Parses a time string into total fractional seconds.
pub fn parse_time(raw: &str) -> Result<f64, EngineError> {
    Performance::parse(MeasurementNature::Time, "time", raw).map(|performance| performance.value)
}

/// Renders total seconds in the notation of `metric`, always with hundredths.
///
/// Values too large for the metric are promoted to the next notation (a 75 second
/// run recorded in `seconds` prints as `01:15.00`) so the output always parses back
/// to the same value.
pub fn format_time(seconds: f64, metric: MeasurementMetric) -> String {
    let total_hundredths = (seconds.max(0.0) * 100.0).round() as u64;
    let hundredths = total_hundredths % 100;
    let total_seconds = total_hundredths / 100;
    let secs = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = (total_seconds / 3_600) % 24;
    let days = total_seconds / 86_400;

    let needed = if days > 0 {
        3
    } else if hours > 0 {
        2
    } else if minutes > 0 {
        1
    } else {
        0
    };
    let requested = match metric {
        MeasurementMetric::Minutes => 1,
        MeasurementMetric::Hours => 2,
        MeasurementMetric::Days => 3,
        _ => 0,
    };

    match needed.max(requested) {
        0 => format!("{secs}.{hundredths:02}"),
        1 => format!("{minutes:02}:{secs:02}.{hundredths:02}"),
        2 => format!("{hours:02}:{minutes:02}:{secs:02}.{hundredths:02}"),
        _ => format!("{days:02}:{hours:02}:{minutes:02}:{secs:02}.{hundredths:02}"),
    }
}

fn time_seconds(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("value is empty".to_string());
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > 4 {
        return Err(format!(
            "expected at most 4 components (DD:HH:MM:SS), found {}",
            parts.len()
        ));
    }

    let (seconds_part, higher) = parts
        .split_last()
        .ok_or_else(|| "value is empty".to_string())?;
    let seconds = unsigned_decimal(seconds_part).ok_or_else(|| {
        format!("seconds component '{seconds_part}' must be an unsigned number")
    })?;

    let mut whole = Vec::with_capacity(higher.len());
    for part in higher {
        let value = part
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("component '{part}' must be a whole number"))?;
        whole.push(value as f64);
    }

    // Components are aligned from the right: [days, hours, minutes].
    whole.reverse();
    let minutes = whole.first().copied();
    let hours = whole.get(1).copied();
    let days = whole.get(2).copied();

    if minutes.is_some() && seconds >= SECONDS_PER_MINUTE {
        return Err(format!("seconds must be below 60, found {seconds}"));
    }
    if let (Some(minutes), Some(_)) = (minutes, hours) {
        if minutes >= 60.0 {
            return Err(format!("minutes must be below 60, found {minutes}"));
        }
    }
    if let (Some(hours), Some(_)) = (hours, days) {
        if hours >= 24.0 {
            return Err(format!("hours must be below 24, found {hours}"));
        }
    }

    Ok(days.unwrap_or(0.0) * SECONDS_PER_DAY
        + hours.unwrap_or(0.0) * SECONDS_PER_HOUR
        + minutes.unwrap_or(0.0) * SECONDS_PER_MINUTE
        + seconds)
}

fn unsigned_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    let dots = raw.chars().filter(|c| *c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != raw.len() {
        return None;
    }
    raw.parse::<f64>().ok()
}

fn decimal(raw: &str, allow_negative: bool) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("value is empty".to_string());
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| "expected a decimal number".to_string())?;
    if !value.is_finite() {
        return Err("expected a finite number".to_string());
    }
    if value < 0.0 && !allow_negative {
        return Err("measurements cannot be negative".to_string());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn parses_every_time_notation() {
        assert!(approx(parse_time("12.5").expect("seconds"), 12.5));
        assert!(approx(parse_time("1:05.25").expect("minutes"), 65.25));
        assert!(approx(parse_time("01:00:00").expect("hours"), 3_600.0));
        assert!(approx(
            parse_time("1:02:03:04.5").expect("days"),
            86_400.0 + 2.0 * 3_600.0 + 3.0 * 60.0 + 4.5
        ));
        assert!(approx(parse_time(" 59.99 ").expect("padded"), 59.99));
    }

    #[test]
    fn rejects_malformed_times() {
        for raw in ["", "abc", "1:2:3:4:5", "1::02", "-12.1", "1:75", "1.2.3", "1:60:00", "1:24:00:00"] {
            let err = parse_time(raw).expect_err(raw);
            match err {
                EngineError::InvalidMeasurement { field, nature, .. } => {
                    assert_eq!(field, "time");
                    assert_eq!(nature, MeasurementNature::Time);
                }
                other => panic!("unexpected error for {raw}: {other:?}"),
            }
        }
    }

    #[test]
    fn seconds_alone_may_exceed_a_minute() {
        assert!(approx(parse_time("75.4").expect("long sprint"), 75.4));
    }

    #[test]
    fn formats_in_the_requested_family() {
        assert_eq!(format_time(12.1, MeasurementMetric::Seconds), "12.10");
        assert_eq!(format_time(12.1, MeasurementMetric::Minutes), "00:12.10");
        assert_eq!(format_time(3_725.5, MeasurementMetric::Hours), "01:02:05.50");
        assert_eq!(format_time(90_061.0, MeasurementMetric::Days), "01:01:01:01.00");
    }

    #[test]
    fn promotes_values_that_overflow_the_metric() {
        assert_eq!(format_time(75.0, MeasurementMetric::Seconds), "01:15.00");
        assert_eq!(format_time(-3.0, MeasurementMetric::Seconds), "0.00");
    }

    #[test]
    fn direction_depends_on_nature() {
        let old = Performance::parse(MeasurementNature::Time, "record", "12.50").expect("time");
        let new = Performance::parse(MeasurementNature::Time, "best_score", "12.10").expect("time");
        assert!(new.improves_on(&old));
        assert!(!old.improves_on(&new));
        assert!(!old.improves_on(&old));

        let old = Performance::parse(MeasurementNature::Length, "record", "4.20").expect("length");
        let new = Performance::parse(MeasurementNature::Length, "best_score", "4.35").expect("length");
        assert!(new.improves_on(&old));
    }

    #[test]
    fn decimals_reject_negative_distances_but_not_scores() {
        assert!(Performance::parse(MeasurementNature::Height, "best_score", "-1").is_err());
        assert!(Performance::parse(MeasurementNature::Score, "best_score", "-1").is_ok());
        assert!(Performance::parse(MeasurementNature::Score, "best_score", "NaN").is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn formatted_times_parse_back(hundredths in 0u64..2_000_000_000) {
                let seconds = hundredths as f64 / 100.0;
                for metric in [
                    MeasurementMetric::Seconds,
                    MeasurementMetric::Minutes,
                    MeasurementMetric::Hours,
                    MeasurementMetric::Days,
                ] {
                    let rendered = format_time(seconds, metric);
                    let parsed = parse_time(&rendered).expect("formatted time parses");
                    prop_assert!(
                        (parsed - seconds).abs() < 1e-6,
                        "{} rendered as {} parsed to {}",
                        seconds,
                        rendered,
                        parsed
                    );
                }
            }
        }
    }
}
