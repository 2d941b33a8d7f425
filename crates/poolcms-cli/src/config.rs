// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Layered configuration
//!
//! Precedence, lowest first: built-in defaults, the `--config` TOML file,
//! `POOLCMS_*` environment variables, command-line flags.

use anyhow::{Context, Result};
use config::{Case, Config, Environment, File, FileFormat};
use poolcms_domain_types::DEFAULT_PAGE_SIZE;
use poolcms_logging::{CliLogLevel, LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

pub const ENV_PREFIX: &str = "POOLCMS";

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Records per listing page
    #[validate(range(min = 1, max = 1000, message = "page-size must be between 1 and 1000"))]
    pub page_size: u32,

    /// JSON file with the initial opportunity collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,

    #[serde(flatten)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Merge defaults, an optional TOML file and the process environment
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder =
            Config::builder().set_default("page-size", i64::from(DEFAULT_PAGE_SIZE))?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let built = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).convert_case(Case::Kebab))
            .build()
            .with_context(|| match config_file {
                Some(path) => format!("loading configuration from {}", path.display()),
                None => "loading configuration".to_string(),
            })?;

        built.try_deserialize().context("parsing configuration")
    }

    /// Apply the `--seed` flag over the file and environment layers
    pub fn with_seed(mut self, seed: Option<PathBuf>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn validated(self) -> Result<Self> {
        self.validate().context("invalid configuration")?;
        Ok(self)
    }

    pub fn log_level(&self) -> CliLogLevel {
        self.logging.level.unwrap_or_default()
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format.unwrap_or_default()
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("rendering configuration as TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.page_size, 5);
        assert!(settings.seed.is_none());
        assert_eq!(settings.log_level(), CliLogLevel::Info);
        assert_eq!(settings.log_format(), LogFormat::Plaintext);
    }

    #[test]
    fn test_load_from_toml_file() {
        let file = config_file(
            r#"
page-size = 10
seed = "/srv/poolcms/opportunities.json"
log-level = "debug"
log-format = "json"
"#,
        );
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.seed, Some(PathBuf::from("/srv/poolcms/opportunities.json")));
        assert_eq!(settings.log_level(), CliLogLevel::Debug);
        assert_eq!(settings.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_partial_file_keeps_default_page_size() {
        let file = config_file("log-level = \"warn\"\n");
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(settings.log_level(), CliLogLevel::Warn);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_seed_flag_overrides_lower_layers() {
        let settings = Settings {
            seed: Some(PathBuf::from("from-file.json")),
            ..Default::default()
        };
        let overridden = settings.clone().with_seed(Some(PathBuf::from("from-flag.json")));
        assert_eq!(overridden.seed, Some(PathBuf::from("from-flag.json")));

        let kept = settings.with_seed(None);
        assert_eq!(kept.seed, Some(PathBuf::from("from-file.json")));
    }

    #[test]
    fn test_page_size_range_is_validated() {
        let zero = Settings {
            page_size: 0,
            ..Default::default()
        };
        assert!(zero.validated().is_err());

        let huge = Settings {
            page_size: 1001,
            ..Default::default()
        };
        assert!(huge.validated().is_err());

        assert!(Settings::default().validated().is_ok());
    }

    #[test]
    fn test_to_toml_uses_kebab_keys() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("page-size = 5"));
        assert!(!rendered.contains("seed"));
    }
}
