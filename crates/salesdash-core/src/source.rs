//! Record source abstraction.

use crate::error::FetchError;
use crate::record::SalesRecord;

/// Anything that can produce the sales record set.
///
/// The network client in `salesdash-client` is the production implementation;
/// tests substitute in-memory fakes via dyn dispatch.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the full record set, single best-effort attempt.
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>, FetchError>;

    /// Server-side product search (`?product=<name>`). Independent of the
    /// client-side text filter, for callers that avoid loading the whole set.
    async fn search_by_product(&self, name: &str) -> Result<Vec<SalesRecord>, FetchError>;
}
