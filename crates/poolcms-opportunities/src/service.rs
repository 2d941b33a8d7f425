// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Opportunity service layer
//!
//! Composes a store with id generation and the read-side query helpers so
//! callers get one entry point for every dashboard operation.

use crate::error::Result;
use crate::export::export_csv;
use crate::ids::IdGenerator;
use crate::metrics::{aggregate_by_consultant, ConsultantMetrics};
use crate::query::{filter_and_sort, run_query, run_query_clamped};
use crate::store::{InMemoryOpportunityStore, OpportunityStore};
use poolcms_domain_types::{
    NewOpportunity, Opportunity, OpportunityFilter, OpportunityPage, OpportunityQuery,
    OpportunityStatus, PageRequest, SortSpec, DEFAULT_PAGE_SIZE,
};
use tracing::{debug, info};
use validator::Validate;

/// Opportunity service
#[derive(Debug)]
pub struct OpportunityService<S: OpportunityStore = InMemoryOpportunityStore> {
    store: S,
    ids: IdGenerator,
    page_size: u32,
}

impl OpportunityService<InMemoryOpportunityStore> {
    /// Service over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(InMemoryOpportunityStore::new())
    }
}

impl<S: OpportunityStore> OpportunityService<S> {
    pub fn new(store: S) -> Self {
        let mut ids = IdGenerator::new();
        for opportunity in store.opportunities() {
            ids.observe(&opportunity.id);
        }
        Self {
            store,
            ids,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Listing page size used by [`Self::list`]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        self.store.opportunities()
    }

    /// Validate a creation request and store it as a new pending record
    pub fn create(&mut self, request: NewOpportunity) -> Result<Opportunity> {
        request.validate()?;

        let id = self.ids.next_id();
        let opportunity = request.into_opportunity(id);
        self.store.add(opportunity.clone())?;

        info!(
            id = %opportunity.id,
            consultant = %opportunity.consultant_email,
            "Created opportunity"
        );
        Ok(opportunity)
    }

    /// Store a fully formed record, keeping its id
    pub fn add(&mut self, opportunity: Opportunity) -> Result<()> {
        self.ids.observe(&opportunity.id);
        self.store.add(opportunity)
    }

    pub fn remove(&mut self, id: &str) -> Option<Opportunity> {
        let removed = self.store.remove(id);
        if removed.is_none() {
            debug!(id, "Remove requested for unknown opportunity");
        }
        removed
    }

    pub fn set_status(&mut self, id: &str, status: OpportunityStatus) -> bool {
        self.store.set_status(id, status)
    }

    pub fn get(&self, id: &str) -> Option<&Opportunity> {
        self.store.get(id)
    }

    pub fn query(&self, query: &OpportunityQuery) -> OpportunityPage {
        run_query(self.store.opportunities(), query)
    }

    /// Like [`Self::query`], but a page past the end yields the last page
    pub fn query_clamped(&self, query: &OpportunityQuery) -> OpportunityPage {
        run_query_clamped(self.store.opportunities(), query)
    }

    /// One page of the admin listing at the configured page size
    pub fn list(&self, filter: OpportunityFilter, sort: SortSpec, page: u32) -> OpportunityPage {
        self.query(&OpportunityQuery {
            filter,
            sort,
            page: PageRequest::new(page, self.page_size),
        })
    }

    /// Every record matching `filter`, sorted, without pagination
    pub fn filtered(&self, filter: &OpportunityFilter, sort: SortSpec) -> Vec<Opportunity> {
        filter_and_sort(self.store.opportunities(), filter, sort)
    }

    pub fn aggregate_by_consultant(&self) -> Vec<ConsultantMetrics> {
        aggregate_by_consultant(self.store.opportunities())
    }

    /// Records assigned to `email`, in collection order
    pub fn consultant_opportunities(&self, email: &str) -> Vec<&Opportunity> {
        self.store
            .opportunities()
            .iter()
            .filter(|opportunity| opportunity.consultant_email == email)
            .collect()
    }

    /// CSV of the whole collection in collection order
    pub fn export_csv(&self) -> String {
        export_csv(self.store.opportunities())
    }

    /// CSV of the current filtered, sorted view, across all pages
    pub fn export_filtered_csv(&self, filter: &OpportunityFilter, sort: SortSpec) -> String {
        export_csv(&self.filtered(filter, sort))
    }
}
