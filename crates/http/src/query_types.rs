//! Request/query types (Deserialize)
//!
//! Wire names are camelCase (`pillId`, `givenBy`, …); required fields are
//! `Option` so presence checks produce the API's own 400 messages instead
//! of extractor rejections.

use chrono::NaiveDate;
use pilltrack_core::DEFAULT_GIVEN_BY;
use serde::Deserialize;

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    raw.parse().map_err(|_| format!("Invalid date '{raw}', expected YYYY-MM-DD"))
}

#[derive(Debug, Deserialize)]
pub struct CreatePillRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl CreatePillRequest {
    /// The pill name with surrounding whitespace removed; an absent or
    /// blank-after-trim name is a validation error.
    pub fn trimmed_name(&self) -> Result<&str, String> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err("Pill name is required".to_owned()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePillRequest {
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct LogRangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

impl LogRangeQuery {
    /// Both bounds, parsed. Missing either is the range listing's 400.
    pub fn parsed(&self) -> Result<(NaiveDate, NaiveDate), String> {
        let (Some(start), Some(end)) = (self.start_date.as_deref(), self.end_date.as_deref())
        else {
            return Err("Start date and end date are required".to_owned());
        };
        Ok((parse_date(start)?, parse_date(end)?))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateLogRequest {
    #[serde(rename = "pillId")]
    pub pill_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "givenBy")]
    pub given_by: Option<String>,
}

impl CreateLogRequest {
    /// The required `(pillId, date)` pair; missing either is a 400.
    pub fn validated(&self) -> Result<(i64, NaiveDate), String> {
        let (Some(pill_id), Some(date)) = (self.pill_id, self.date.as_deref()) else {
            return Err("Pill ID and date are required".to_owned());
        };
        Ok((pill_id, parse_date(date)?))
    }

    /// Actor name, defaulting to `"User"` when absent or empty.
    pub fn given_by(&self) -> &str {
        self.given_by.as_deref().filter(|s| !s.is_empty()).unwrap_or(DEFAULT_GIVEN_BY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_pill_trims_name() {
        let req: CreatePillRequest =
            serde_json::from_value(json!({"name": " Aspirin "})).expect("valid CreatePillRequest");
        assert_eq!(req.trimmed_name().unwrap(), "Aspirin");
    }

    #[test]
    fn test_create_pill_rejects_missing_name() {
        let req: CreatePillRequest =
            serde_json::from_value(json!({})).expect("valid CreatePillRequest");
        assert_eq!(req.trimmed_name().unwrap_err(), "Pill name is required");
    }

    #[test]
    fn test_create_pill_rejects_blank_name() {
        let req: CreatePillRequest =
            serde_json::from_value(json!({"name": "   "})).expect("valid CreatePillRequest");
        assert!(req.trimmed_name().is_err());
    }

    #[test]
    fn test_log_range_requires_both_bounds() {
        let q: LogRangeQuery = serde_json::from_value(json!({"startDate": "2024-01-01"}))
            .expect("valid LogRangeQuery");
        assert_eq!(q.parsed().unwrap_err(), "Start date and end date are required");
    }

    #[test]
    fn test_log_range_parses_inclusive_bounds() {
        let q: LogRangeQuery =
            serde_json::from_value(json!({"startDate": "2024-01-01", "endDate": "2024-01-31"}))
                .expect("valid LogRangeQuery");
        let (start, end) = q.parsed().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_log_range_rejects_malformed_date() {
        let q: LogRangeQuery =
            serde_json::from_value(json!({"startDate": "01/05/2024", "endDate": "2024-01-31"}))
                .expect("valid LogRangeQuery");
        assert!(q.parsed().unwrap_err().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_create_log_requires_pill_and_date() {
        let req: CreateLogRequest =
            serde_json::from_value(json!({"pillId": 1})).expect("valid CreateLogRequest");
        assert_eq!(req.validated().unwrap_err(), "Pill ID and date are required");
    }

    #[test]
    fn test_create_log_accepts_camel_case_wire_names() {
        let req: CreateLogRequest = serde_json::from_value(
            json!({"pillId": 1, "date": "2024-01-05", "givenBy": "Nurse"}),
        )
        .expect("valid CreateLogRequest");
        let (pill_id, date) = req.validated().unwrap();
        assert_eq!(pill_id, 1);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(req.given_by(), "Nurse");
    }

    #[test]
    fn test_create_log_given_by_defaults_to_user() {
        let req: CreateLogRequest =
            serde_json::from_value(json!({"pillId": 1, "date": "2024-01-05"}))
                .expect("valid CreateLogRequest");
        assert_eq!(req.given_by(), "User");
    }

    #[test]
    fn test_create_log_empty_given_by_defaults_to_user() {
        let req: CreateLogRequest =
            serde_json::from_value(json!({"pillId": 1, "date": "2024-01-05", "givenBy": ""}))
                .expect("valid CreateLogRequest");
        assert_eq!(req.given_by(), "User");
    }
}
