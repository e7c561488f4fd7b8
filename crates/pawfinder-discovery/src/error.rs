use thiserror::Error;

/// Failure modes of a single source attempt.
///
/// Everything here is recovered inside the fallback orchestrator; callers of
/// the discovery service never observe these directly. An empty-but-valid
/// response is not an error — adapters return `Ok(vec![])` for it.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source cannot even be attempted (e.g. no credential provisioned).
    #[error("source unavailable: {reason}")]
    Unavailable { reason: &'static str },

    /// Connection failure or timeout before a response was read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The source answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A 2xx response whose body carries a provider-level error code.
    #[error("upstream error status: {status}")]
    Upstream { status: String },
}

/// Errors the discovery service surfaces to its caller.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The caller-supplied origin is outside the valid lat/lng range. The
    /// only source-independent failure; no adapter is attempted.
    #[error("invalid origin coordinate ({latitude}, {longitude})")]
    InvalidOrigin { latitude: f64, longitude: f64 },

    /// The shared HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}
