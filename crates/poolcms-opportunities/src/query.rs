// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Filter, sort and paginate opportunity listings

use chrono::NaiveDate;
use poolcms_domain_types::{
    clamp_page, total_pages, Opportunity, OpportunityFilter, OpportunityPage, OpportunityQuery,
    PageRequest, SortDirection, SortField, SortSpec,
};
use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Date(NaiveDate),
    Days(i64),
    Status(&'static str),
}

fn sort_key(opportunity: &Opportunity, field: SortField) -> Option<SortKey> {
    match field {
        SortField::StartDate => opportunity.start().map(SortKey::Date),
        SortField::EndDate => opportunity.end().map(SortKey::Date),
        SortField::Duration => opportunity.duration_days().map(SortKey::Days),
        SortField::Status => Some(SortKey::Status(opportunity.status.as_str())),
    }
}

// Unknown keys go last in either direction.
fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Records matching `filter`, stably sorted by `sort`
///
/// Records with equal keys keep their collection order.
pub fn filter_and_sort(
    opportunities: &[Opportunity],
    filter: &OpportunityFilter,
    sort: SortSpec,
) -> Vec<Opportunity> {
    let mut keyed: Vec<(Option<SortKey>, &Opportunity)> = opportunities
        .iter()
        .filter(|opportunity| filter.matches(opportunity))
        .map(|opportunity| (sort_key(opportunity, sort.field), opportunity))
        .collect();

    // sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), sort.direction));

    keyed.into_iter().map(|(_, opportunity)| opportunity.clone()).collect()
}

/// Run a complete listing query and slice out the requested page
pub fn run_query(opportunities: &[Opportunity], query: &OpportunityQuery) -> OpportunityPage {
    let page = PageRequest::new(query.page.page, query.page.page_size);
    let matching = filter_and_sort(opportunities, &query.filter, query.sort);
    trace_query(query, matching.len(), page);
    paginate(matching, page)
}

/// Run a listing query, moving a page past the end back onto the last page
///
/// The collection is filtered and sorted once; only the slice depends on the
/// clamped page.
pub fn run_query_clamped(
    opportunities: &[Opportunity],
    query: &OpportunityQuery,
) -> OpportunityPage {
    let requested = PageRequest::new(query.page.page, query.page.page_size);
    let matching = filter_and_sort(opportunities, &query.filter, query.sort);
    let pages = total_pages(matching.len(), requested.page_size);
    let page = PageRequest::new(clamp_page(requested.page, pages), requested.page_size);
    trace_query(query, matching.len(), page);
    paginate(matching, page)
}

/// Slice one page out of an already filtered and sorted sequence
pub fn paginate(matching: Vec<Opportunity>, page: PageRequest) -> OpportunityPage {
    let page = PageRequest::new(page.page, page.page_size);
    let total = matching.len();

    let items = matching
        .into_iter()
        .skip(page.offset())
        .take(page.page_size as usize)
        .collect();

    OpportunityPage {
        items,
        total,
        page: page.page,
        page_size: page.page_size,
        total_pages: total_pages(total, page.page_size),
    }
}

fn trace_query(query: &OpportunityQuery, total: usize, page: PageRequest) {
    tracing::trace!(
        total,
        page = page.page,
        page_size = page.page_size,
        sort = %query.sort.field,
        direction = %query.sort.direction,
        "Ran opportunity query"
    );
}
