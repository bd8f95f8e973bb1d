use tracing::debug;

use super::config::PointsTable;
use super::domain::{EventKind, Participant, ResultEntry, ScoredResult};
use crate::error::EngineError;

/// Converts finishing positions into points and VLP awards.
///
/// The output keeps the input order so callers can diff it against stored rows by id.
/// Disqualified entries (position `0`) never score. Tied positions are not re-ranked:
/// every entry at a place receives that place's table value.
pub fn allocate_points(
    entries: &[ResultEntry],
    event_kind: EventKind,
    points_table: &PointsTable,
) -> Result<Vec<ScoredResult>, EngineError> {
    let results = entries
        .iter()
        .map(|entry| allocate_entry(entry, event_kind, points_table))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        kind = event_kind.label(),
        entries = results.len(),
        points = results.iter().map(|result| result.points).sum::<u32>(),
        "allocated points"
    );

    Ok(results)
}

fn allocate_entry(
    entry: &ResultEntry,
    event_kind: EventKind,
    points_table: &PointsTable,
) -> Result<ScoredResult, EngineError> {
    let participant_id = entry.participant_id.trim();
    if participant_id.is_empty() {
        return Err(EngineError::MissingParticipant {
            entry: entry.id.clone(),
        });
    }

    let position = u32::try_from(entry.position).map_err(|_| EngineError::InvalidPosition {
        entry: entry.id.clone(),
        position: entry.position,
    })?;

    let (points, bonus_points) = if position == 0 {
        (0, 0)
    } else {
        (
            points_table.points_for(event_kind, position),
            points_table.bonus_for(position),
        )
    };

    Ok(ScoredResult {
        id: entry.id.clone(),
        participant: Participant::for_kind(event_kind, participant_id),
        position,
        points,
        bonus_points,
    })
}
