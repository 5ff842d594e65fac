//! Type definitions for Aevo API responses.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One market from the `/markets` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AevoMarket {
    /// Instrument name, e.g. "BTC-PERP"
    pub instrument_name: String,
    /// Whether the instrument is currently tradable
    pub is_active: bool,
    /// Set for announced-but-not-yet-launched instruments
    #[serde(default)]
    pub pre_launch: Option<bool>,
}

impl AevoMarket {
    /// Active instruments that have actually launched.
    pub fn is_live(&self) -> bool {
        self.is_active && !self.pre_launch.unwrap_or(false)
    }
}

/// Response from `/funding` for a single instrument.
#[derive(Debug, Clone, Deserialize)]
pub struct AevoFunding {
    /// Current hourly funding rate, string-encoded
    #[serde(with = "rust_decimal::serde::str")]
    pub funding_rate: Decimal,
}
