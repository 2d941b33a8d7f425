// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Opportunity storage

use crate::error::{OpportunityError, Result};
use poolcms_domain_types::{Opportunity, OpportunityStatus};
use tracing::{debug, warn};

/// Ordered opportunity collection
///
/// Records keep insertion order; removals close the gap without reordering
/// the remaining records. Ids are unique within a store.
pub trait OpportunityStore {
    /// Append a record to the end of the collection
    fn add(&mut self, opportunity: Opportunity) -> Result<()>;

    /// Remove the record with this id, if any
    fn remove(&mut self, id: &str) -> Option<Opportunity>;

    fn get(&self, id: &str) -> Option<&Opportunity>;

    /// Record a consultant's answer; returns `false` for an unknown id
    fn set_status(&mut self, id: &str, status: OpportunityStatus) -> bool;

    /// All records in collection order
    fn opportunities(&self) -> &[Opportunity];

    fn len(&self) -> usize {
        self.opportunities().len()
    }

    fn is_empty(&self) -> bool {
        self.opportunities().is_empty()
    }
}

/// Vec-backed store used by the dashboard process
#[derive(Debug, Clone, Default)]
pub struct InMemoryOpportunityStore {
    opportunities: Vec<Opportunity>,
}

impl InMemoryOpportunityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.opportunities.iter().position(|opportunity| opportunity.id == id)
    }
}

impl OpportunityStore for InMemoryOpportunityStore {
    fn add(&mut self, opportunity: Opportunity) -> Result<()> {
        if self.position(&opportunity.id).is_some() {
            warn!(id = %opportunity.id, "Rejecting opportunity with duplicate id");
            return Err(OpportunityError::DuplicateId(opportunity.id));
        }
        debug!(
            id = %opportunity.id,
            consultant = %opportunity.consultant_email,
            "Adding opportunity"
        );
        self.opportunities.push(opportunity);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Option<Opportunity> {
        let index = self.position(id)?;
        debug!(id, "Removing opportunity");
        Some(self.opportunities.remove(index))
    }

    fn get(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.iter().find(|opportunity| opportunity.id == id)
    }

    fn set_status(&mut self, id: &str, status: OpportunityStatus) -> bool {
        match self.opportunities.iter_mut().find(|opportunity| opportunity.id == id) {
            Some(opportunity) => {
                debug!(id, from = %opportunity.status, to = %status, "Updating opportunity status");
                opportunity.status = status;
                true
            }
            None => false,
        }
    }

    fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }
}
