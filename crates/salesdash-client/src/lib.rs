//! HTTP record source for the sales API.
//!
//! Wraps `GET /sales` and `GET /sales?product=<text>`: JSON over HTTP(S), no
//! auth beyond the content-type headers, one best-effort attempt per call.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

use salesdash_core::{FetchError, RecordSource, SalesRecord};

#[derive(Debug, Clone)]
pub struct SalesApiClient {
    client: Client,
    base_url: String,
}

impl SalesApiClient {
    /// Build a client against `base_url` (scheme + host, no trailing slash
    /// required) with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Transport(anyhow::Error::new(e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One GET against `/sales`, optionally with a server-side product query.
    async fn get_sales(&self, product: Option<&str>) -> Result<Vec<SalesRecord>, FetchError> {
        let mut url = reqwest::Url::parse(&format!("{}/sales", self.base_url))
            .map_err(|e| FetchError::Transport(anyhow::Error::new(e)))?;
        if let Some(product) = product {
            url.query_pairs_mut().append_pair("product", product);
        }

        debug!(url = %url, "fetching sales records");
        let resp = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "sales request failed");
            FetchError::Transport(anyhow::Error::new(e))
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "sales request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        // Decode through serde_json so a malformed body maps to Decode, not
        // to a transport error.
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Transport(anyhow::Error::new(e)))?;
        let records: Vec<SalesRecord> = serde_json::from_str(&body)?;
        debug!(count = records.len(), "sales records received");
        Ok(records)
    }
}

#[async_trait::async_trait]
impl RecordSource for SalesApiClient {
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>, FetchError> {
        self.get_sales(None).await
    }

    async fn search_by_product(&self, name: &str) -> Result<Vec<SalesRecord>, FetchError> {
        self.get_sales(Some(name)).await
    }
}
