//! Hyperliquid REST API client.
//!
//! One `metaAndAssetCtxs` POST covers discovery and pricing: the asset
//! universe and the funding contexts come back as two parallel-indexed
//! arrays. The raw rate uses the same 2400 periods-per-day multiplier
//! ladder as dYdX (see `rates::table` module docs).

use reqwest::Client;
use rust_decimal_macros::dec;
use std::time::Duration;
use tracing::{debug, instrument};

use super::types::*;
use crate::config::HyperliquidConfig;
use crate::exchange::{ExchangeError, FundingSource, Venue};
use crate::rates::{FundingRate, RateTable};

/// Hyperliquid API client for fetching perpetuals funding data.
#[derive(Debug)]
pub struct HyperliquidClient {
    client: Client,
    base_url: String,
}

impl HyperliquidClient {
    /// Create a new Hyperliquid client.
    pub fn new(config: &HyperliquidConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ExchangeError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Get metadata and asset contexts for all perpetuals.
    pub async fn meta_and_asset_ctxs(&self) -> Result<MetaAndAssetCtxsResponse, ExchangeError> {
        let url = format!("{}/info", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&InfoRequest::MetaAndAssetCtxs)
            .send()
            .await
            .map_err(|e| ExchangeError::fetch(&url, e))?;

        let status = response.status();
        debug!(%url, %status, "hyperliquid request");
        if !status.is_success() {
            return Err(ExchangeError::status(&url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::fetch(&url, e))?;
        serde_json::from_str(&body)
            .map_err(|e| ExchangeError::schema(Venue::Hyperliquid, e.to_string()))
    }
}

#[async_trait::async_trait]
impl FundingSource for HyperliquidClient {
    fn venue(&self) -> Venue {
        Venue::Hyperliquid
    }

    #[instrument(skip(self), name = "hyperliquid_fetch")]
    async fn fetch(&self) -> Result<RateTable, ExchangeError> {
        let (meta, ctxs) = self.meta_and_asset_ctxs().await?;

        // The funding array is only meaningful zipped against the universe.
        if meta.universe.len() != ctxs.len() {
            return Err(ExchangeError::schema(
                Venue::Hyperliquid,
                format!(
                    "universe has {} assets but {} contexts",
                    meta.universe.len(),
                    ctxs.len()
                ),
            ));
        }

        let rows = meta.universe.into_iter().zip(ctxs).map(|(asset, ctx)| {
            (
                asset.name,
                FundingRate::from_period_rate(ctx.funding, dec!(2400)),
            )
        });

        Ok(RateTable::from_native(Venue::Hyperliquid, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: String) -> HyperliquidClient {
        HyperliquidClient::new(&HyperliquidConfig { base_url }).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_zips_parallel_arrays() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/info"))
            .and(body_json(serde_json::json!({"type": "metaAndAssetCtxs"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"universe": [{"name": "BTC"}, {"name": "ETH"}]},
                [{"funding": "0.00001"}, {"funding": "-0.00002"}]
            ])))
            .mount(&server)
            .await;

        let table = test_client(server.uri()).fetch().await.unwrap();

        assert_eq!(table.venue(), Venue::Hyperliquid);
        assert_eq!(table.len(), 2);

        let btc = table.get("BTC").unwrap();
        assert_eq!(btc.hourly, dec!(0.00001));
        assert_eq!(btc.daily, dec!(0.024));

        let eth = table.get("ETH").unwrap();
        assert_eq!(eth.daily, dec!(-0.048));
    }

    #[tokio::test]
    async fn test_length_mismatch_is_schema_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"universe": [{"name": "BTC"}, {"name": "ETH"}]},
                [{"funding": "0.00001"}]
            ])))
            .mount(&server)
            .await;

        let err = test_client(server.uri()).fetch().await.unwrap_err();
        match err {
            ExchangeError::Schema { venue, message } => {
                assert_eq!(venue, Venue::Hyperliquid);
                assert!(message.contains("2 assets"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/info"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = test_client(server.uri()).fetch().await.unwrap_err();
        assert!(matches!(err, ExchangeError::Status { .. }));
    }
}
