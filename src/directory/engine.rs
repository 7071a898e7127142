//! The filter engine: one pure pass from (records, filter state) to the
//! ordered list the grid renders.
//!
//! Inactive predicates — fields at their "no constraint" default — are
//! skipped. The pass never mutates its inputs and identical inputs always
//! produce the identical ordered output.

use crate::models::filters::{FilterState, SortBy};
use crate::models::photographers::PhotographerRecord;

/// Apply every active predicate, then sort.
pub fn apply_filters(
    records: &[PhotographerRecord],
    filters: &FilterState,
) -> Vec<PhotographerRecord> {
    let mut result: Vec<PhotographerRecord> = records
        .iter()
        .filter(|p| matches_search(p, &filters.search))
        .filter(|p| matches_location(p, &filters.location))
        .filter(|p| p.price >= filters.price_range.0 && p.price <= filters.price_range.1)
        .filter(|p| filters.min_rating <= 0.0 || p.rating >= filters.min_rating)
        .filter(|p| matches_styles(p, &filters.styles))
        .cloned()
        .collect();

    sort_records(&mut result, filters.sort_by);
    result
}

/// Case-insensitive substring match over name, location and the union of
/// style and tag entries. An empty search passes everything.
fn matches_search(record: &PhotographerRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let term = search.to_lowercase();
    record.name.to_lowercase().contains(&term)
        || record.location.to_lowercase().contains(&term)
        || record
            .styles
            .iter()
            .chain(record.tags.iter())
            .any(|tag| tag.to_lowercase().contains(&term))
}

/// Case-insensitive exact match against the location dropdown value.
fn matches_location(record: &PhotographerRecord, location: &str) -> bool {
    location.is_empty() || record.location.eq_ignore_ascii_case(location)
}

/// All-of semantics: every selected style must be present on the record.
fn matches_styles(record: &PhotographerRecord, styles: &[String]) -> bool {
    styles
        .iter()
        .all(|wanted| record.styles.iter().any(|s| s == wanted))
}

/// Stable sort per the selected order; an unspecified order keeps the
/// filtered order untouched.
fn sort_records(records: &mut [PhotographerRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::Price => records.sort_by_key(|p| p.price),
        SortBy::Rating => records.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Recent => records.sort_by(|a, b| b.id.cmp(&a.id)),
        SortBy::Unspecified => {}
    }
}
