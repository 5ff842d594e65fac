//! Venue-agnostic trait for funding rate providers.

use async_trait::async_trait;
use std::fmt;

use crate::exchange::ExchangeError;
use crate::rates::RateTable;

/// Venue identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Aevo,
    Dydx,
    Hyperliquid,
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::Aevo => write!(f, "Aevo"),
            Venue::Dydx => write!(f, "dYdX"),
            Venue::Hyperliquid => write!(f, "Hyperliquid"),
        }
    }
}

impl Venue {
    /// Short code for display (2 chars).
    pub fn short_code(&self) -> &'static str {
        match self {
            Venue::Aevo => "AE",
            Venue::Dydx => "DY",
            Venue::Hyperliquid => "HL",
        }
    }
}

/// Trait for venues that provide current funding rates.
///
/// Implement this trait to add support for a new perpetuals exchange. A
/// fetch covers discovery plus rate retrieval and returns a fully
/// normalized [`RateTable`]; any single request failure aborts the whole
/// fetch rather than producing a partial table.
#[async_trait]
pub trait FundingSource: Send + Sync {
    /// Returns the venue identifier.
    fn venue(&self) -> Venue;

    /// Fetch current funding rates for all perpetual instruments.
    async fn fetch(&self) -> Result<RateTable, ExchangeError>;
}
