//! The aggregation pipeline: one pass over the filtered record set producing
//! the chart- and widget-ready figures.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{DateWindow, SalesRecord};

/// Time-bucket granularity, derived once per pass from the window span so a
/// widening window coarsens the chart instead of flooding it. Thresholds are
/// fixed: more than one whole year → year, more than one whole month → month,
/// otherwise day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    pub fn for_window(window: &DateWindow) -> Self {
        if window.whole_years() > 1 {
            Self::Year
        } else if window.whole_months() > 1 {
            Self::Month
        } else {
            Self::Day
        }
    }

    /// Bucket key for a date. The formats ("yyyy", "yyyy-MM", "yyyy-MM-dd")
    /// are lexicographically chronological by construction, which is what
    /// lets the trend series sort by plain string order.
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        match self {
            Self::Day => date.format("%Y-%m-%d").to_string(),
            Self::Month => date.format("%Y-%m").to_string(),
            Self::Year => date.format("%Y").to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// One point of the sales trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub bucket: String,
    pub sales: i64,
}

/// Summed units for one product over the whole window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTotal {
    pub product: String,
    pub sales: i64,
}

/// Everything the presentation layer needs from one aggregation pass. Derived
/// state only: recomputed from scratch whenever the window or search changes,
/// owns nothing across passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Per-bucket unit totals, bucket key ascending. Empty buckets are not
    /// zero-filled; only populated buckets are emitted.
    pub trend: Vec<TrendPoint>,
    pub granularity: Granularity,
    /// Per-product unit totals in first-encountered order.
    pub products: Vec<ProductTotal>,
    pub total_sales: i64,
    pub total_revenue: f64,
    /// Empty string when no product qualifies (empty set, or all totals ≤ 0).
    pub best_selling_product: String,
    /// Records excluded from bucketing because their date did not parse.
    pub skipped_records: usize,
}

/// Run the full pipeline over an already-filtered record set.
///
/// Grand totals and the best seller cover the entire input whether or not the
/// date parses; only the bucketed series skip malformed dates.
pub fn aggregate(records: &[SalesRecord], window: &DateWindow) -> AggregationResult {
    let granularity = Granularity::for_window(window);

    // Trend: BTreeMap gives the ascending bucket order for free.
    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
    let mut skipped = 0usize;

    // Per-product: bucketed per (product, key) first, then collapsed to one
    // total per product. Only the collapsed totals are surfaced; the order of
    // `product_order` is first-encountered.
    let mut product_order: Vec<String> = Vec::new();
    let mut product_buckets: HashMap<String, HashMap<String, i64>> = HashMap::new();

    for record in records {
        let Some(date) = record.date() else {
            skipped += 1;
            continue;
        };
        let key = granularity.bucket_key(date);
        *buckets.entry(key.clone()).or_insert(0) += record.sales;

        if !product_buckets.contains_key(&record.product) {
            product_order.push(record.product.clone());
        }
        *product_buckets
            .entry(record.product.clone())
            .or_default()
            .entry(key)
            .or_insert(0) += record.sales;
    }

    let trend = buckets
        .into_iter()
        .map(|(bucket, sales)| TrendPoint { bucket, sales })
        .collect();

    let products = product_order
        .iter()
        .map(|product| ProductTotal {
            product: product.clone(),
            sales: product_buckets
                .get(product)
                .map(|per_bucket| per_bucket.values().sum())
                .unwrap_or(0),
        })
        .collect();

    let mut total_sales = 0i64;
    let mut total_revenue = 0f64;
    for record in records {
        total_sales += record.sales;
        total_revenue += record.revenue;
    }

    AggregationResult {
        trend,
        granularity,
        products,
        total_sales,
        total_revenue,
        best_selling_product: best_seller(records),
        skipped_records: skipped,
    }
}

/// Product with the highest summed units over the whole input. Only strictly
/// positive totals qualify; ties resolve to the lexicographically smallest
/// name so the answer never depends on iteration order.
fn best_seller(records: &[SalesRecord]) -> String {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for record in records {
        *totals.entry(record.product.as_str()).or_insert(0) += record.sales;
    }

    let mut best = "";
    let mut max = 0i64;
    for (product, sales) in totals {
        if sales > max || (sales == max && sales > 0 && product < best) {
            best = product;
            max = sales;
        }
    }
    best.to_string()
}
