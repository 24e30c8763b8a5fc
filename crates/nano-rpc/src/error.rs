//! RPC error types.

use thiserror::Error;

/// Errors produced while dispatching an RPC action.
///
/// All variants are retried identically by the client up to its configured
/// budget; after the budget is spent the last failure is wrapped in
/// [`RpcError::RetriesExhausted`].
#[derive(Debug, Error)]
pub enum RpcError {
    /// The HTTP exchange itself failed (connection refused, timeout, ...).
    #[error("RPC action '{action}' failed against {url}: {source}")]
    Http {
        action: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The node answered with a non-success HTTP status.
    #[error("RPC action '{action}' returned HTTP {status} from {url}: {body}")]
    HttpStatus {
        action: String,
        url: String,
        status: u16,
        body: String,
    },

    /// The response body was not valid JSON, or did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The node returned a well-formed response carrying a non-empty `error` field.
    #[error("RPC action '{action}' rejected by node: {message}")]
    Node { action: String, message: String },

    /// The retry budget was spent without a successful attempt.
    #[error("RPC action '{action}' failed after {retries} retries: {message}")]
    RetriesExhausted {
        action: String,
        retries: u32,
        message: String,
    },
}
