// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Logging configuration types

use crate::{CliLogLevel, LogFormat};
use serde::{Deserialize, Serialize};

/// Logging section of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Logging verbosity level
    #[serde(rename = "log-level", default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CliLogLevel>,

    /// Log output format
    #[serde(rename = "log-format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<LogFormat>,
}
