//! View-model assembly: everything the widgets, charts, and table consume,
//! in one serializable envelope.

use serde::Serialize;

use salesdash_core::{
    aggregate, filter_by_date, filter_by_name, sort_records, DateWindow, Granularity,
    ProductTotal, SalesRecord, SortDirection, SortField, TrendPoint,
};

/// Summary widget values.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_sales: i64,
    pub total_revenue: f64,
    /// Empty string when the window holds no qualifying product.
    pub best_selling_product: String,
}

/// One table row. `no` is the ordinal over the whole filtered+sorted set, so
/// numbering continues across pages.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub no: usize,
    pub product: String,
    pub sales: i64,
    pub revenue: f64,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TablePage {
    pub rows: Vec<TableRow>,
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

/// The complete render input. Always constructible: loading and failure
/// produce the empty shape with the flags set.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub summary: Summary,
    pub trend: Vec<TrendPoint>,
    pub granularity: Granularity,
    pub products: Vec<ProductTotal>,
    pub table: TablePage,
    /// Records dropped for an unparseable date, surfaced for diagnostics.
    pub skipped_records: usize,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn build_view(
    records: &[SalesRecord],
    window: &DateWindow,
    search: &str,
    sort: Option<(SortField, SortDirection)>,
    page: usize,
    page_size: usize,
    loading: bool,
    error: Option<String>,
) -> DashboardView {
    let dated = filter_by_date(records, window);
    let mut filtered = filter_by_name(dated.records, search);
    if let Some((field, direction)) = sort {
        sort_records(&mut filtered, field, direction);
    }

    let result = aggregate(&filtered, window);

    let total_rows = filtered.len();
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let rows = filtered
        .iter()
        .enumerate()
        .skip(page * page_size)
        .take(page_size)
        .map(|(i, r)| TableRow {
            no: i + 1,
            product: r.product.clone(),
            sales: r.sales,
            revenue: r.revenue,
            date: r.date.clone(),
        })
        .collect();

    DashboardView {
        loading,
        error,
        summary: Summary {
            total_sales: result.total_sales,
            total_revenue: result.total_revenue,
            best_selling_product: result.best_selling_product,
        },
        trend: result.trend,
        granularity: result.granularity,
        products: result.products,
        table: TablePage {
            rows,
            page,
            page_size,
            total_rows,
            total_pages,
        },
        skipped_records: result.skipped_records + dated.unparseable,
    }
}
