// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

pub mod config;
pub mod export;
pub mod list;
pub mod report;

pub use clap::Parser;
use clap::Subcommand;

use anyhow::{Context, Result};
use poolcms_logging::CliLoggingArgs;
use poolcms_opportunities::{load_seed, populate, InMemoryOpportunityStore, OpportunityService};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub use config::Settings;

#[derive(Parser)]
#[command(
    name = "poolcms",
    about = "Consultant opportunity pool reports",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// JSON file with the initial opportunity collection
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of the filtered, sorted opportunity listing
    List(list::ListArgs),
    /// Per-consultant counts and response rates
    Metrics(report::MetricsArgs),
    /// Opportunities assigned to one consultant
    Consultant(report::ConsultantArgs),
    /// Write the filtered, sorted listing as CSV
    Export(export::ExportArgs),
    /// Print the resolved configuration
    Config,
}

impl Cli {
    /// Resolve settings from every configuration layer
    pub fn settings(&self) -> Result<Settings> {
        Settings::load(self.config.as_deref())?
            .with_seed(self.seed.clone())
            .validated()
    }
}

/// Build the service, populating it from the configured seed file
pub fn open_service(settings: &Settings) -> Result<OpportunityService> {
    let mut store = InMemoryOpportunityStore::new();
    match &settings.seed {
        Some(path) => {
            let records = load_seed(path)?;
            populate(&mut store, records)
                .with_context(|| format!("populating store from {}", path.display()))?;
        }
        None => info!("No seed file configured; starting with an empty collection"),
    }
    Ok(OpportunityService::new(store).with_page_size(settings.page_size))
}

pub fn run<W: Write>(command: &Commands, settings: &Settings, out: &mut W) -> Result<()> {
    if let Commands::Config = command {
        write!(out, "{}", settings.to_toml()?)?;
        return Ok(());
    }

    let service = open_service(settings)?;
    match command {
        Commands::List(args) => args.run(&service, out),
        Commands::Metrics(args) => args.run(&service, out),
        Commands::Consultant(args) => args.run(&service, out),
        Commands::Export(args) => args.run(&service, out),
        Commands::Config => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolcms_domain_types::{OpportunityStatus, SortDirection, SortField};

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "poolcms",
            "--seed",
            "opportunities.json",
            "list",
            "--search",
            "senior",
            "--status",
            "accepted",
            "--sort-by",
            "duration",
            "--sort-dir",
            "desc",
            "--page",
            "2",
            "--page-size",
            "10",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(PathBuf::from("opportunities.json")));
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.query.search, "senior");
                assert_eq!(args.query.status, Some(OpportunityStatus::Accepted));
                assert_eq!(args.query.sort_by, SortField::Duration);
                assert_eq!(args.query.sort_dir, SortDirection::Desc);
                assert_eq!(args.page, 2);
                assert_eq!(args.page_size, Some(10));
                assert!(!args.json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["poolcms", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert!(args.query.search.is_empty());
                assert_eq!(args.query.status, None);
                assert_eq!(args.query.sort_by, SortField::StartDate);
                assert_eq!(args.query.sort_dir, SortDirection::Asc);
                assert_eq!(args.page, 1);
                assert_eq!(args.page_size, None);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_page_size_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["poolcms", "list", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["poolcms", "list", "--page-size", "1001"]).is_err());
        assert!(Cli::try_parse_from(["poolcms", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(Cli::try_parse_from(["poolcms", "list", "--status", "maybe"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "poolcms",
            "metrics",
            "--json",
            "--log-level",
            "debug",
            "--config",
            "poolcms.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("poolcms.toml")));
        assert_eq!(
            cli.logging.log_level,
            Some(poolcms_logging::CliLogLevel::Debug)
        );
        assert!(matches!(cli.command, Commands::Metrics(ref args) if args.json));
    }

    #[test]
    fn test_parse_consultant_and_export() {
        let cli = Cli::try_parse_from(["poolcms", "consultant", "hari@company.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Consultant(ref args) if args.email == "hari@company.com"));

        let cli = Cli::try_parse_from(["poolcms", "export", "--status", "pending", "-o", "out.csv"])
            .unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.query.status, Some(OpportunityStatus::Pending));
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_open_service_without_seed_is_empty() {
        let service = open_service(&Settings::default()).unwrap();
        assert!(service.opportunities().is_empty());
        assert_eq!(service.page_size(), 5);
    }

    #[test]
    fn test_open_service_with_missing_seed_fails() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            seed: Some(dir.path().join("missing.json")),
            ..Default::default()
        };
        assert!(open_service(&settings).is_err());
    }

    #[test]
    fn test_run_config_prints_toml() {
        let mut out = Vec::new();
        run(&Commands::Config, &Settings::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("page-size = 5"));
    }
}
