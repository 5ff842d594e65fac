//! Type definitions for Hyperliquid API responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the Hyperliquid info endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum InfoRequest {
    /// Get metadata and asset contexts (funding rates, prices, OI).
    #[serde(rename = "metaAndAssetCtxs")]
    MetaAndAssetCtxs,
}

/// Response from metaAndAssetCtxs: a tuple of (Meta, Vec<AssetCtx>).
/// The context array is parallel-indexed to `meta.universe`.
pub type MetaAndAssetCtxsResponse = (Meta, Vec<AssetCtx>);

/// Universe metadata for perpetuals.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub universe: Vec<AssetMeta>,
}

/// Metadata for a single asset in the universe.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetMeta {
    /// Asset name (e.g., "BTC", "ETH")
    pub name: String,
}

/// Real-time context for an asset.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetCtx {
    /// Current funding rate, string-encoded
    #[serde(with = "rust_decimal::serde::str")]
    pub funding: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_request_serialization() {
        let req = InfoRequest::MetaAndAssetCtxs;
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"type":"metaAndAssetCtxs"}"#);
    }

    #[test]
    fn test_deserialize_tuple_response() {
        let json = r#"[
            {"universe": [{"name": "BTC", "szDecimals": 4}, {"name": "ETH", "szDecimals": 3}]},
            [{"funding": "0.0000125", "markPx": "50000.0"}, {"funding": "-0.0000125", "markPx": "3000.0"}]
        ]"#;

        let (meta, ctxs): MetaAndAssetCtxsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(meta.universe.len(), 2);
        assert_eq!(meta.universe[0].name, "BTC");
        assert_eq!(ctxs.len(), 2);
        assert_eq!(ctxs[0].funding.to_string(), "0.0000125");
    }
}
