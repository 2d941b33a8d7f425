// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Opportunity records and their lifecycle status
//!
//! An opportunity links a consultant (by email) to a project interval and
//! carries the consultant's answer. Dates are kept exactly as supplied and
//! parsed on demand, so a record with a malformed date is still storable and
//! simply reports an unknown duration.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use validator::Validate;

/// Consultant answer to an opportunity
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OpportunityStatus {
    /// Awaiting an answer
    #[default]
    Pending,
    /// Consultant took the opportunity
    Accepted,
    /// Consultant turned the opportunity down
    Declined,
}

impl OpportunityStatus {
    /// Wire/storage spelling of the status
    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityStatus::Pending => "pending",
            OpportunityStatus::Accepted => "accepted",
            OpportunityStatus::Declined => "declined",
        }
    }

    /// Whether the consultant has given a definitive answer
    pub fn is_answered(self) -> bool {
        !matches!(self, OpportunityStatus::Pending)
    }
}

impl std::fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OpportunityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OpportunityStatus::Pending),
            "accepted" => Ok(OpportunityStatus::Accepted),
            "declined" => Ok(OpportunityStatus::Declined),
            _ => Err(format!(
                "Invalid opportunity status: {}. Use 'pending', 'accepted' or 'declined'",
                s
            )),
        }
    }
}

/// A work assignment proposal stored in the opportunity collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub consultant_email: String,
    /// ISO 8601 calendar date, as supplied
    pub start_date: String,
    /// ISO 8601 calendar date, as supplied; not checked against `start_date`
    pub end_date: String,
    #[serde(default)]
    pub status: OpportunityStatus,
}

impl Opportunity {
    pub fn start(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.end_date)
    }

    /// Whole-day calendar difference `end - start`
    ///
    /// Returns `None` when either date cannot be parsed. Negative values are
    /// returned as-is.
    pub fn duration_days(&self) -> Option<i64> {
        let start = self.start()?;
        let end = self.end()?;
        Some(end.signed_duration_since(start).num_days())
    }

    /// Human readable duration: `"1 day"`, `"N days"`, or `"-"` when the
    /// duration is unknown or negative
    pub fn duration_label(&self) -> String {
        match self.duration_days() {
            Some(1) => "1 day".to_string(),
            Some(days) if days >= 0 => format!("{} days", days),
            _ => "-".to_string(),
        }
    }
}

/// Opportunity creation request, as submitted by the assignment form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewOpportunity {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "Consultant email cannot be empty"))]
    pub consultant_email: String,
    #[validate(length(min = 1, message = "Start date cannot be empty"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "End date cannot be empty"))]
    pub end_date: String,
}

impl NewOpportunity {
    /// Turn the request into a pending record with the given id
    pub fn into_opportunity(self, id: String) -> Opportunity {
        Opportunity {
            id,
            title: self.title,
            description: self.description,
            consultant_email: self.consultant_email,
            start_date: self.start_date,
            end_date: self.end_date,
            status: OpportunityStatus::Pending,
        }
    }
}

/// Parse an ISO 8601 date or date-time into its calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and offset-less
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]`.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn opportunity(start: &str, end: &str) -> Opportunity {
        Opportunity {
            id: "1".to_string(),
            title: "Senior React Developer".to_string(),
            description: "Frontend rebuild".to_string(),
            consultant_email: "a@x.com".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            status: OpportunityStatus::Pending,
        }
    }

    #[test]
    fn test_status_display_and_parse() {
        for status in OpportunityStatus::iter() {
            let parsed: OpportunityStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert_eq!("ACCEPTED".parse::<OpportunityStatus>(), Ok(OpportunityStatus::Accepted));
        assert!("maybe".parse::<OpportunityStatus>().is_err());
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(OpportunityStatus::default(), OpportunityStatus::Pending);
        assert!(!OpportunityStatus::Pending.is_answered());
        assert!(OpportunityStatus::Declined.is_answered());
    }

    #[test]
    fn test_duration_days() {
        assert_eq!(opportunity("2024-01-01", "2024-01-06").duration_days(), Some(5));
        assert_eq!(opportunity("2024-02-28", "2024-03-01").duration_days(), Some(2));
        assert_eq!(opportunity("2024-01-10", "2024-01-05").duration_days(), Some(-5));
        assert_eq!(opportunity("soon", "2024-01-05").duration_days(), None);
        assert_eq!(opportunity("2024-01-05", "").duration_days(), None);
    }

    #[test]
    fn test_duration_accepts_timestamps() {
        let record = opportunity("2024-01-01T09:30:00", "2024-01-03T18:00:00Z");
        assert_eq!(record.duration_days(), Some(2));
        let record = opportunity("2024-01-01T09:30", "2024-01-02");
        assert_eq!(record.duration_days(), Some(1));
    }

    #[test]
    fn test_duration_label() {
        assert_eq!(opportunity("2024-01-01", "2024-01-01").duration_label(), "0 days");
        assert_eq!(opportunity("2024-01-01", "2024-01-02").duration_label(), "1 day");
        assert_eq!(opportunity("2024-01-01", "2024-01-15").duration_label(), "14 days");
        assert_eq!(opportunity("2024-01-15", "2024-01-01").duration_label(), "-");
        assert_eq!(opportunity("not-a-date", "2024-01-01").duration_label(), "-");
    }

    #[test]
    fn test_serde_uses_camel_case_and_defaults_status() {
        let json = r#"{
            "id": "1700000000000",
            "title": "Full Stack Engineer",
            "description": "Platform work",
            "consultantEmail": "kisshore@company.com",
            "startDate": "2024-01-12",
            "endDate": "2024-02-12"
        }"#;
        let record: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, OpportunityStatus::Pending);
        assert_eq!(record.consultant_email, "kisshore@company.com");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["startDate"], "2024-01-12");
    }

    #[test]
    fn test_new_opportunity_validation() {
        let request = NewOpportunity {
            title: "Frontend Lead".to_string(),
            description: "Lead the UI team".to_string(),
            consultant_email: "a@x.com".to_string(),
            start_date: "2024-03-01".to_string(),
            end_date: "2024-06-01".to_string(),
        };
        assert!(request.validate().is_ok());

        let empty_title = NewOpportunity {
            title: String::new(),
            ..request.clone()
        };
        let errors = empty_title.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let record = request.into_opportunity("42".to_string());
        assert_eq!(record.id, "42");
        assert_eq!(record.status, OpportunityStatus::Pending);
    }
}
