use chrono::NaiveDate;

use salesdash_app::{Dashboard, LoadState};
use salesdash_core::{DateWindow, FetchError, RecordSource, SalesRecord};

struct FixtureSource {
    records: Vec<SalesRecord>,
}

#[async_trait::async_trait]
impl RecordSource for FixtureSource {
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>, FetchError> {
        Ok(self.records.clone())
    }

    async fn search_by_product(&self, name: &str) -> Result<Vec<SalesRecord>, FetchError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.product.contains(name))
            .cloned()
            .collect())
    }
}

struct DownSource;

#[async_trait::async_trait]
impl RecordSource for DownSource {
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>, FetchError> {
        Err(FetchError::Status(502))
    }

    async fn search_by_product(&self, _name: &str) -> Result<Vec<SalesRecord>, FetchError> {
        Err(FetchError::Status(502))
    }
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn rec(product: &str, sales: i64, revenue: f64, date: &str) -> SalesRecord {
    SalesRecord {
        product: product.to_string(),
        sales,
        revenue,
        date: date.to_string(),
    }
}

fn fixture() -> FixtureSource {
    FixtureSource {
        records: vec![
            rec("Espresso Machine", 5, 50.0, "2024-01-01"),
            rec("Milk Frother", 7, 70.0, "2024-01-02"),
            rec("Espresso Machine", 4, 40.0, "2024-01-03"),
            rec("Grinder", 6, 60.0, "2023-11-20"), // outside the window
            rec("Mystery", 9, 90.0, "not-a-date"),
        ],
    }
}

#[tokio::test]
async fn refresh_loads_and_the_view_reflects_the_window() {
    let mut dash = Dashboard::new(DateWindow::new(d("2024-01-01"), d("2024-01-31")));
    dash.refresh(&fixture()).await;

    assert!(matches!(dash.load_state(), LoadState::Ready(_)));
    let view = dash.view();
    assert!(!view.loading);
    assert!(view.error.is_none());

    assert_eq!(view.summary.total_sales, 16);
    assert_eq!(view.summary.total_revenue, 160.0);
    assert_eq!(view.summary.best_selling_product, "Espresso Machine");

    let buckets: Vec<(&str, i64)> = view
        .trend
        .iter()
        .map(|p| (p.bucket.as_str(), p.sales))
        .collect();
    assert_eq!(
        buckets,
        vec![("2024-01-01", 5), ("2024-01-02", 7), ("2024-01-03", 4)]
    );

    assert_eq!(view.table.total_rows, 3);
    assert_eq!(view.table.rows[0].no, 1);
    assert_eq!(view.skipped_records, 1);
}

#[tokio::test]
async fn failed_fetch_still_renders() {
    let mut dash = Dashboard::new(DateWindow::new(d("2024-01-01"), d("2024-01-31")));
    dash.refresh(&DownSource).await;

    assert!(matches!(dash.load_state(), LoadState::Failed(_)));
    let view = dash.view();
    assert_eq!(view.error.as_deref(), Some("unexpected status 502"));
    assert_eq!(view.summary.total_sales, 0);
    assert!(view.trend.is_empty());
    assert!(view.table.rows.is_empty());
}

#[tokio::test]
async fn changing_the_window_recomputes_everything() {
    let mut dash = Dashboard::new(DateWindow::new(d("2024-01-01"), d("2024-01-31")));
    dash.refresh(&fixture()).await;

    dash.set_window(DateWindow::new(d("2023-11-01"), d("2024-01-31")));
    let view = dash.view();
    // Window now spans more than one whole month: monthly buckets.
    assert_eq!(view.granularity, salesdash_core::Granularity::Month);
    assert_eq!(view.summary.total_sales, 22);
    let buckets: Vec<&str> = view.trend.iter().map(|p| p.bucket.as_str()).collect();
    assert_eq!(buckets, vec!["2023-11", "2024-01"]);
}

#[tokio::test]
async fn text_search_composes_with_the_date_filter() {
    let mut dash = Dashboard::new(DateWindow::new(d("2024-01-01"), d("2024-01-31")));
    dash.refresh(&fixture()).await;

    dash.set_search("espresso");
    let view = dash.view();
    assert_eq!(view.table.total_rows, 2);
    assert_eq!(view.summary.total_sales, 9);
    assert_eq!(view.summary.best_selling_product, "Espresso Machine");
    assert_eq!(view.products.len(), 1);
}

#[tokio::test]
async fn server_side_search_is_available_independently() {
    let source = fixture();
    let records = source.search_by_product("Grinder").await.expect("search");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].product, "Grinder");
}
