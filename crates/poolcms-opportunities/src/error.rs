// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the opportunity store

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpportunityError>;

/// Errors raised at the edges of the store
///
/// Listing, metrics and export never fail; only record intake does.
#[derive(Debug, Error)]
pub enum OpportunityError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Opportunity with ID '{0}' already exists")]
    DuplicateId(String),

    #[error("Failed to read seed file {}: {source}", path.display())]
    SeedIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed seed file {}: {source}", path.display())]
    SeedFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}
