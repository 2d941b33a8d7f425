// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for the poolcms opportunity store
//!
//! This crate contains the records and value types shared between the
//! opportunity store, its query engine and the `poolcms` CLI.

pub mod opportunity;
pub mod query;

// Re-export commonly used types
pub use opportunity::*;
pub use query::*;
