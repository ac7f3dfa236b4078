use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One administration of a pill on a calendar date.
///
/// At most one log exists per `(pill_id, date)` pair; the storage layer
/// enforces this with a unique constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillLog {
    /// Server-generated identifier.
    pub id: i64,
    /// The pill that was given.
    pub pill_id: i64,
    /// Calendar date of administration (no time component).
    pub date: NaiveDate,
    /// Who gave the pill. Defaults to `"User"` when the caller omits it.
    pub given_by: String,
    /// Record-creation instant, set by the database.
    pub timestamp: DateTime<Utc>,
}

/// A log joined with its pill's name, as returned by the range listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillLogWithName {
    pub id: i64,
    pub pill_id: i64,
    pub date: NaiveDate,
    pub given_by: String,
    pub timestamp: DateTime<Utc>,
    pub pill_name: String,
}

/// Outcome of a log insert.
///
/// Duplicate detection lives in the schema (`ON CONFLICT DO NOTHING`), so
/// the storage layer reports it as a tagged value rather than making
/// callers probe row counts.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateLogOutcome {
    /// A new row was inserted.
    Created(PillLog),
    /// A log for this `(pill_id, date)` pair already existed; nothing changed.
    AlreadyExists,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_log() -> PillLog {
        PillLog {
            id: 3,
            pill_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            given_by: "User".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_log_date_renders_as_iso_day() {
        let value = serde_json::to_value(sample_log()).unwrap();
        assert_eq!(value["date"], "2024-01-05");
    }

    #[test]
    fn test_log_with_name_carries_pill_name() {
        let log = sample_log();
        let entry = PillLogWithName {
            id: log.id,
            pill_id: log.pill_id,
            date: log.date,
            given_by: log.given_by,
            timestamp: log.timestamp,
            pill_name: "Aspirin".to_owned(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["pill_name"], "Aspirin");
        assert_eq!(value["date"], "2024-01-05");
    }

    #[test]
    fn test_create_log_outcome_distinguishes_duplicate() {
        let created = CreateLogOutcome::Created(sample_log());
        assert_ne!(created, CreateLogOutcome::AlreadyExists);
    }
}
