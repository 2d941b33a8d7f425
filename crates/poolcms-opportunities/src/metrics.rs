// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Per-consultant response metrics
//!
//! Metrics are derived on demand from the current collection and never
//! stored, so they always reflect the latest status changes.

use poolcms_domain_types::{Opportunity, OpportunityStatus};
use serde::Serialize;
use std::collections::HashMap;

/// Status counts for a single consultant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsultantStats {
    pub total: usize,
    pub accepted: usize,
    pub declined: usize,
    pub pending: usize,
}

impl ConsultantStats {
    fn record(&mut self, status: OpportunityStatus) {
        self.total += 1;
        match status {
            OpportunityStatus::Accepted => self.accepted += 1,
            OpportunityStatus::Declined => self.declined += 1,
            OpportunityStatus::Pending => self.pending += 1,
        }
    }

    /// Share of opportunities that received any answer
    pub fn response_rate(&self) -> f64 {
        ratio(self.accepted + self.declined, self.total)
    }

    /// Share of all opportunities that were accepted
    pub fn completion_rate(&self) -> f64 {
        ratio(self.accepted, self.total)
    }

    /// Share of answered opportunities that were accepted
    pub fn engagement_rate(&self) -> f64 {
        ratio(self.accepted, self.accepted + self.declined)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Metrics row for one consultant, rates expressed as fractions in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantMetrics {
    pub consultant_email: String,
    #[serde(flatten)]
    pub stats: ConsultantStats,
    pub response_rate: f64,
    pub completion_rate: f64,
    pub engagement_rate: f64,
}

impl ConsultantMetrics {
    fn new(consultant_email: String, stats: ConsultantStats) -> Self {
        Self {
            consultant_email,
            response_rate: stats.response_rate(),
            completion_rate: stats.completion_rate(),
            engagement_rate: stats.engagement_rate(),
            stats,
        }
    }
}

/// Group records by consultant email, in order of first appearance
pub fn aggregate_by_consultant<'a, I>(opportunities: I) -> Vec<ConsultantMetrics>
where
    I: IntoIterator<Item = &'a Opportunity>,
{
    let mut order: Vec<&'a str> = Vec::new();
    let mut stats: HashMap<&'a str, ConsultantStats> = HashMap::new();

    for opportunity in opportunities {
        let email = opportunity.consultant_email.as_str();
        stats
            .entry(email)
            .or_insert_with(|| {
                order.push(email);
                ConsultantStats::default()
            })
            .record(opportunity.status);
    }

    order
        .into_iter()
        .map(|email| {
            let counts = stats.get(email).copied().unwrap_or_default();
            ConsultantMetrics::new(email.to_string(), counts)
        })
        .collect()
}

/// Render a fraction as a percentage with one decimal, e.g. `"66.7%"`
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str, status: OpportunityStatus) -> Opportunity {
        Opportunity {
            id: format!("{}-{}", email, status),
            title: "Role".to_string(),
            description: "desc".to_string(),
            consultant_email: email.to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-10".to_string(),
            status,
        }
    }

    #[test]
    fn test_three_statuses_for_one_consultant() {
        let records = vec![
            record("a@x.com", OpportunityStatus::Accepted),
            record("a@x.com", OpportunityStatus::Declined),
            record("a@x.com", OpportunityStatus::Pending),
        ];
        let metrics = aggregate_by_consultant(&records);
        assert_eq!(metrics.len(), 1);

        let a = &metrics[0];
        assert_eq!(a.consultant_email, "a@x.com");
        assert_eq!(
            a.stats,
            ConsultantStats {
                total: 3,
                accepted: 1,
                declined: 1,
                pending: 1
            }
        );
        assert!((a.response_rate - 2.0 / 3.0).abs() < 1e-9);
        assert!((a.completion_rate - 1.0 / 3.0).abs() < 1e-9);
        assert!((a.engagement_rate - 0.5).abs() < 1e-9);
        assert_eq!(format_percent(a.response_rate), "66.7%");
        assert_eq!(format_percent(a.completion_rate), "33.3%");
        assert_eq!(format_percent(a.engagement_rate), "50.0%");
    }

    #[test]
    fn test_all_pending_rates_are_zero() {
        let records = vec![
            record("b@x.com", OpportunityStatus::Pending),
            record("b@x.com", OpportunityStatus::Pending),
        ];
        let metrics = aggregate_by_consultant(&records);
        let b = &metrics[0];
        assert_eq!(b.stats.pending, 2);
        assert_eq!(b.response_rate, 0.0);
        assert_eq!(b.completion_rate, 0.0);
        assert_eq!(b.engagement_rate, 0.0);
    }

    #[test]
    fn test_first_appearance_order() {
        let records = vec![
            record("z@x.com", OpportunityStatus::Pending),
            record("a@x.com", OpportunityStatus::Accepted),
            record("z@x.com", OpportunityStatus::Accepted),
            record("m@x.com", OpportunityStatus::Declined),
        ];
        let emails: Vec<String> = aggregate_by_consultant(&records)
            .into_iter()
            .map(|m| m.consultant_email)
            .collect();
        assert_eq!(emails, vec!["z@x.com", "a@x.com", "m@x.com"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(aggregate_by_consultant(&Vec::<Opportunity>::new()).is_empty());
    }

    #[test]
    fn test_format_percent_edges() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_metrics_serialize_flat() {
        let records = vec![record("a@x.com", OpportunityStatus::Accepted)];
        let value = serde_json::to_value(&aggregate_by_consultant(&records)[0]).unwrap();
        assert_eq!(value["consultantEmail"], "a@x.com");
        assert_eq!(value["total"], 1);
        assert_eq!(value["accepted"], 1);
        assert_eq!(value["engagementRate"], 1.0);
    }
}
