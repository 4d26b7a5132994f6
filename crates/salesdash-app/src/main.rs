use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use salesdash_app::Dashboard;
use salesdash_client::SalesApiClient;
use salesdash_core::config::Config;
use salesdash_core::DateWindow;

/// Fetch the sales feed once and emit the dashboard view model as JSON.
///
/// A fetch failure is logged and still renders the empty view; only invalid
/// configuration is fatal.
#[tokio::main]
async fn main() -> Result<()> {
    // Structured JSON logging, level via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("salesdash=info".parse()?),
        )
        .json()
        .init();

    let cfg = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(api_url = %cfg.api_url, window_days = cfg.window_days, "starting salesdash");

    let client = SalesApiClient::new(&cfg.api_url, Duration::from_secs(cfg.http_timeout_secs))?;

    let today = Utc::now().date_naive();
    let window = DateWindow::new(today - chrono::Duration::days(cfg.window_days as i64), today);

    let mut dashboard = Dashboard::new(window);
    dashboard.set_page_size(cfg.page_size);
    dashboard.refresh(&client).await;

    let view = dashboard.view();
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
