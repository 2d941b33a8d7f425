// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Loading an initial collection from a JSON file

use crate::error::{OpportunityError, Result};
use crate::store::OpportunityStore;
use poolcms_domain_types::Opportunity;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a JSON array of opportunity records
///
/// Records use the camelCase wire names; a missing `status` reads as pending.
pub fn load_seed(path: &Path) -> Result<Vec<Opportunity>> {
    let contents = fs::read_to_string(path).map_err(|source| OpportunityError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| OpportunityError::SeedFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Add seed records to a store in file order, stopping at the first
/// duplicate id
pub fn populate<S: OpportunityStore>(store: &mut S, records: Vec<Opportunity>) -> Result<usize> {
    let count = records.len();
    for record in records {
        store.add(record)?;
    }
    info!(count, "Loaded seed opportunities");
    Ok(count)
}
