// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::list::QueryArgs;
use anyhow::{Context, Result};
use clap::Args;
use poolcms_opportunities::{export_csv, OpportunityService};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Clone, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Write the CSV to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Export every matching record, not just one page
    pub fn run<W: Write>(&self, service: &OpportunityService, out: &mut W) -> Result<()> {
        let records = service.filtered(&self.query.filter(), self.query.sort());
        let csv = export_csv(&records);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &csv)
                    .with_context(|| format!("writing CSV export to {}", path.display()))?;
                info!(path = %path.display(), rows = records.len(), "Exported opportunities");
            }
            None => writeln!(out, "{}", csv)?,
        }
        Ok(())
    }
}
