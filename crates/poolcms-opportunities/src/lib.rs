// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Opportunity store and query engine
//!
//! Holds the ordered opportunity collection and answers the questions the
//! admin dashboard asks of it: filtered, sorted and paged listings,
//! per-consultant response metrics, and CSV exports. Everything runs
//! synchronously over in-memory state; the store is owned by whoever
//! composes the application and handed out by reference.

pub mod error;
pub mod export;
pub mod ids;
pub mod metrics;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{OpportunityError, Result};
pub use export::{export_csv, CSV_HEADER};
pub use ids::IdGenerator;
pub use metrics::{aggregate_by_consultant, format_percent, ConsultantMetrics, ConsultantStats};
pub use query::{filter_and_sort, paginate, run_query, run_query_clamped};
pub use seed::{load_seed, populate};
pub use service::OpportunityService;
pub use store::{InMemoryOpportunityStore, OpportunityStore};

pub use poolcms_domain_types::*;
