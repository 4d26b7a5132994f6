//! Client-side record filters. Pure, non-mutating, recomputed on every pass.

use crate::record::{DateWindow, SalesRecord};

/// Outcome of the date filter: the surviving records plus how many were
/// excluded for an unparseable date (surfaced as a diagnostic, never an
/// error — one bad record must not blank the dashboard).
#[derive(Debug, Clone, Default)]
pub struct DateFilter {
    pub records: Vec<SalesRecord>,
    pub unparseable: usize,
}

/// Keep records whose date parses and falls inside the inclusive window.
pub fn filter_by_date(records: &[SalesRecord], window: &DateWindow) -> DateFilter {
    let mut out = DateFilter::default();
    for record in records {
        match record.date() {
            Some(date) if window.contains(date) => out.records.push(record.clone()),
            Some(_) => {}
            None => out.unparseable += 1,
        }
    }
    out
}

/// Case-insensitive substring match on the product name. An empty query is
/// the identity.
pub fn filter_by_name(records: Vec<SalesRecord>, query: &str) -> Vec<SalesRecord> {
    if query.is_empty() {
        return records;
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.product.to_lowercase().contains(&needle))
        .collect()
}
