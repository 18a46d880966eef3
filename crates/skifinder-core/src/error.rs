// crates/skifinder-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FinderError>;

/// Errors produced by the search pipeline.
///
/// Candidate-endpoint failures are swallowed while earlier candidates remain;
/// only exhaustion of the whole candidate list surfaces one of these.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Every candidate endpoint failed at the transport level.
    #[error("no backend endpoint reachable at {base}")]
    Unreachable { base: String },

    /// A reached endpoint answered with a non-success status (or a body
    /// that did not parse as a result list).
    #[error("backend error (HTTP {status}): {message}")]
    Backend { status: u16, message: String },

    /// The submitted query was empty after trimming. Never user-visible.
    #[error("empty search query")]
    EmptyQuery,

    /// A search is already in flight for this session.
    #[error("a search is already in flight")]
    SearchInFlight,

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FinderError {
    /// The message shown to the user when a search fails.
    ///
    /// A structured error from the last candidate endpoint is surfaced
    /// verbatim; everything else collapses to the generic retry message.
    pub fn user_message(&self) -> String {
        match self {
            FinderError::Backend { message, .. } => message.clone(),
            _ => "Failed to fetch ski resorts. Please try again later.".to_string(),
        }
    }

    /// True for failures the session treats as recoverable-by-retry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FinderError::EmptyQuery)
    }
}
