use thiserror::Error;

/// Failure modes of a record source. One best-effort attempt per call; the
/// caller treats any variant as "no data" and keeps rendering.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout...).
    #[error("transport error: {0}")]
    Transport(#[source] anyhow::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body arrived but was not a valid record array.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
