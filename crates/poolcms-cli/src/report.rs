// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Consultant-centric reports

use anyhow::Result;
use clap::Args;
use poolcms_opportunities::{format_percent, OpportunityService};
use std::io::Write;

#[derive(Args, Clone, Debug)]
pub struct MetricsArgs {
    /// Print metrics as JSON
    #[arg(long)]
    pub json: bool,
}

impl MetricsArgs {
    pub fn run<W: Write>(&self, service: &OpportunityService, out: &mut W) -> Result<()> {
        let metrics = service.aggregate_by_consultant();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &metrics)?;
            writeln!(out)?;
            return Ok(());
        }

        if metrics.is_empty() {
            writeln!(out, "No opportunities assigned yet.")?;
            return Ok(());
        }

        for row in &metrics {
            writeln!(out, "{}", row.consultant_email)?;
            writeln!(
                out,
                "  Total: {}  Accepted: {}  Declined: {}  Pending: {}",
                row.stats.total, row.stats.accepted, row.stats.declined, row.stats.pending
            )?;
            writeln!(
                out,
                "  Response rate: {}  Completion rate: {}  Engagement rate: {}",
                format_percent(row.response_rate),
                format_percent(row.completion_rate),
                format_percent(row.engagement_rate)
            )?;
        }
        Ok(())
    }
}

#[derive(Args, Clone, Debug)]
pub struct ConsultantArgs {
    /// Consultant email, matched exactly
    pub email: String,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConsultantArgs {
    pub fn run<W: Write>(&self, service: &OpportunityService, out: &mut W) -> Result<()> {
        let opportunities = service.consultant_opportunities(&self.email);

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &opportunities)?;
            writeln!(out)?;
            return Ok(());
        }

        if opportunities.is_empty() {
            writeln!(out, "No opportunities for {}", self.email)?;
            return Ok(());
        }

        for opportunity in opportunities {
            writeln!(
                out,
                "{:<28} {:<9} {} to {} ({})",
                opportunity.title,
                opportunity.status,
                opportunity.start_date,
                opportunity.end_date,
                opportunity.duration_label()
            )?;
        }
        Ok(())
    }
}
