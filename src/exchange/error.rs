//! Typed errors for venue clients.

use reqwest::StatusCode;
use thiserror::Error;

use crate::exchange::Venue;

/// Errors surfaced by venue clients.
///
/// There is no retry policy and no partial-success mode: any of these aborts
/// the owning fetch and propagates to the caller.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// HTTP client construction failed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Venue returned a non-success HTTP status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: StatusCode },

    /// Response parsed as JSON but is missing or mistypes an expected field,
    /// or is structurally inconsistent.
    #[error("{venue} response schema error: {message}")]
    Schema { venue: Venue, message: String },
}

impl ExchangeError {
    pub(crate) fn fetch(url: &str, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn status(url: &str, status: StatusCode) -> Self {
        Self::Status {
            url: url.to_string(),
            status,
        }
    }

    pub(crate) fn schema(venue: Venue, message: impl Into<String>) -> Self {
        Self::Schema {
            venue,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_request() {
        let err = ExchangeError::status("https://api.example.com/markets", StatusCode::BAD_GATEWAY);
        let msg = err.to_string();
        assert!(msg.contains("https://api.example.com/markets"));
        assert!(msg.contains("502"));
    }

    #[test]
    fn test_schema_error_names_venue() {
        let err = ExchangeError::schema(Venue::Dydx, "market BTC-USD missing nextFundingRate");
        assert!(err.to_string().contains("dYdX"));
        assert!(err.to_string().contains("nextFundingRate"));
    }
}
