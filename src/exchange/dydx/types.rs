//! Type definitions for dYdX v3 API responses.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Response from `/v3/markets`, keyed by market name (e.g. "BTC-USD").
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsResponse {
    pub markets: HashMap<String, DydxMarket>,
}

/// Per-market fields used by the scanner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DydxMarket {
    /// Funding rate for the upcoming settlement, string-encoded. Absent for
    /// markets the venue has not priced yet; callers must treat that as a
    /// schema violation rather than a zero rate.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub next_funding_rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_markets() {
        let json = r#"{
            "markets": {
                "BTC-USD": {"nextFundingRate": "0.0000125", "status": "ONLINE"},
                "ETH-USD": {"status": "ONLINE"}
            }
        }"#;

        let response: MarketsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.markets["BTC-USD"].next_funding_rate,
            Some(dec!(0.0000125))
        );
        assert_eq!(response.markets["ETH-USD"].next_funding_rate, None);
    }
}
