// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Query parameters and results for opportunity listings

use crate::opportunity::{Opportunity, OpportunityStatus};
use serde::{Deserialize, Serialize};

/// Page size used by the admin opportunity listing
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Filtering parameters
///
/// An empty search term and an absent status both mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityFilter {
    /// Case-insensitive substring matched against title and consultant email
    #[serde(default)]
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OpportunityStatus>,
}

impl OpportunityFilter {
    pub fn matches(&self, opportunity: &Opportunity) -> bool {
        self.matches_search(opportunity) && self.matches_status(opportunity)
    }

    fn matches_search(&self, opportunity: &Opportunity) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        opportunity.title.to_lowercase().contains(&needle)
            || opportunity.consultant_email.to_lowercase().contains(&needle)
    }

    fn matches_status(&self, opportunity: &Opportunity) -> bool {
        self.status.map_or(true, |status| opportunity.status == status)
    }
}

/// Sortable opportunity attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    StartDate,
    EndDate,
    /// Whole days between start and end
    Duration,
    /// Lexicographic on the status string
    Status,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::StartDate => write!(f, "startDate"),
            SortField::EndDate => write!(f, "endDate"),
            SortField::Duration => write!(f, "duration"),
            SortField::Status => write!(f, "status"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Sort key and direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl PageRequest {
    /// Build a page request; page 0 is read as page 1 and a zero page size
    /// as a single-record page
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.page_size.max(1) as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Complete listing request: filter, then sort, then slice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityQuery {
    #[serde(default)]
    pub filter: OpportunityFilter,
    #[serde(default)]
    pub sort: SortSpec,
    #[serde(default)]
    pub page: PageRequest,
}

/// One page of a filtered and sorted listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityPage {
    pub items: Vec<Opportunity>,
    /// Number of records matching the filter, across all pages
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// `ceil(count / page_size)`; zero records means zero pages
pub fn total_pages(count: usize, page_size: u32) -> u32 {
    let page_size = page_size.max(1) as usize;
    count.div_ceil(page_size) as u32
}

/// Clamp a requested page into `[1, total_pages]` (page 1 when there are
/// no pages at all)
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}
