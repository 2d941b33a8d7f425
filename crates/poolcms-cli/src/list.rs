// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use clap::Args;
use poolcms_domain_types::{
    OpportunityFilter, OpportunityQuery, OpportunityStatus, PageRequest, SortDirection, SortField,
    SortSpec,
};
use poolcms_opportunities::OpportunityService;
use std::io::Write;

/// Filter and sort flags shared by `list` and `export`
#[derive(Args, Clone, Debug)]
pub struct QueryArgs {
    /// Case-insensitive match on title or consultant email
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long, value_enum)]
    pub status: Option<OpportunityStatus>,

    #[arg(long = "sort-by", value_enum, default_value_t = SortField::StartDate)]
    pub sort_by: SortField,

    #[arg(long = "sort-dir", value_enum, default_value_t = SortDirection::Asc)]
    pub sort_dir: SortDirection,
}

impl QueryArgs {
    pub fn filter(&self) -> OpportunityFilter {
        OpportunityFilter {
            search: self.search.clone(),
            status: self.status,
        }
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec::new(self.sort_by, self.sort_dir)
    }
}

#[derive(Args, Clone, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Page to show; pages past the end show the last page
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Records per page (defaults to the configured page size)
    #[arg(long = "page-size", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub page_size: Option<u32>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run<W: Write>(&self, service: &OpportunityService, out: &mut W) -> Result<()> {
        let page_size = self.page_size.unwrap_or(service.page_size());
        let result = service.query_clamped(&OpportunityQuery {
            filter: self.query.filter(),
            sort: self.query.sort(),
            page: PageRequest::new(self.page, page_size),
        });

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &result)?;
            writeln!(out)?;
            return Ok(());
        }

        if result.items.is_empty() {
            if service.opportunities().is_empty() {
                writeln!(out, "No opportunities assigned yet.")?;
            } else {
                writeln!(out, "No opportunities match the current filters.")?;
            }
            return Ok(());
        }

        for opportunity in &result.items {
            writeln!(
                out,
                "{:<28} {:<28} {:<9} {}",
                opportunity.title,
                opportunity.consultant_email,
                opportunity.status,
                opportunity.duration_label()
            )?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Page {} of {} ({} matching)",
            result.page, result.total_pages, result.total
        )?;
        Ok(())
    }
}
