use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked medication.
///
/// Pills are never physically deleted: retiring one sets `active = false`
/// so its historical logs keep resolving to a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pill {
    /// Server-generated identifier.
    pub id: i64,
    /// Display name, non-empty after trimming.
    pub name: String,
    /// Whether the pill shows up in the default listing.
    pub active: bool,
    /// Creation instant, set by the database.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pill_serializes_with_snake_case_fields() {
        let pill = Pill {
            id: 1,
            name: "Aspirin".to_owned(),
            active: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 8, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&pill).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Aspirin");
        assert_eq!(value["active"], true);
        assert!(value["created_at"].as_str().unwrap().starts_with("2024-01-05T08:30:00"));
    }

    #[test]
    fn test_pill_round_trips() {
        let pill = Pill {
            id: 7,
            name: "Ibuprofen".to_owned(),
            active: false,
            created_at: Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(),
        };
        let json = serde_json::to_string(&pill).unwrap();
        let back: Pill = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pill);
    }
}
