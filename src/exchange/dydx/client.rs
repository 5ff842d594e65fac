//! dYdX v3 REST API client.
//!
//! A single markets call carries `nextFundingRate` for every perpetual, so
//! a fetch is one request. The raw rate uses the venue's 2400 periods-per-day
//! multiplier ladder (see `rates::table` module docs).

use reqwest::Client;
use rust_decimal_macros::dec;
use std::time::Duration;
use tracing::{debug, instrument};

use super::types::MarketsResponse;
use crate::config::DydxConfig;
use crate::exchange::{ExchangeError, FundingSource, Venue};
use crate::rates::{FundingRate, RateTable};

/// dYdX v3 API client for fetching perpetuals funding data.
#[derive(Debug)]
pub struct DydxClient {
    client: Client,
    base_url: String,
}

impl DydxClient {
    /// Create a new dYdX client.
    pub fn new(config: &DydxConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ExchangeError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// List all markets with embedded funding data.
    pub async fn markets(&self) -> Result<MarketsResponse, ExchangeError> {
        let url = format!("{}/v3/markets", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ExchangeError::fetch(&url, e))?;

        let status = response.status();
        debug!(%url, %status, "dydx request");
        if !status.is_success() {
            return Err(ExchangeError::status(&url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::fetch(&url, e))?;
        serde_json::from_str(&body).map_err(|e| ExchangeError::schema(Venue::Dydx, e.to_string()))
    }
}

#[async_trait::async_trait]
impl FundingSource for DydxClient {
    fn venue(&self) -> Venue {
        Venue::Dydx
    }

    #[instrument(skip(self), name = "dydx_fetch")]
    async fn fetch(&self) -> Result<RateTable, ExchangeError> {
        let response = self.markets().await?;

        let rows = response
            .markets
            .into_iter()
            .map(|(name, market)| {
                let rate = market.next_funding_rate.ok_or_else(|| {
                    ExchangeError::schema(
                        Venue::Dydx,
                        format!("market {name} missing nextFundingRate"),
                    )
                })?;
                Ok((name, FundingRate::from_period_rate(rate, dec!(2400))))
            })
            .collect::<Result<Vec<_>, ExchangeError>>()?;

        Ok(RateTable::from_native(Venue::Dydx, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: String) -> DydxClient {
        DydxClient::new(&DydxConfig { base_url }).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_applies_2400_ladder() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/markets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "markets": {
                    "BTC-USD": {"nextFundingRate": "0.00001"},
                    "ETH-USD": {"nextFundingRate": "-0.00002"}
                }
            })))
            .mount(&server)
            .await;

        let table = test_client(server.uri()).fetch().await.unwrap();

        assert_eq!(table.venue(), Venue::Dydx);
        assert_eq!(table.len(), 2);

        let btc = table.get("BTC").unwrap();
        assert_eq!(btc.hourly, dec!(0.00001));
        assert_eq!(btc.daily, dec!(0.024));
        assert_eq!(btc.annualized, dec!(0.024) * dec!(365));
    }

    #[tokio::test]
    async fn test_missing_next_funding_rate_is_schema_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/markets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "markets": {
                    "BTC-USD": {"status": "ONLINE"}
                }
            })))
            .mount(&server)
            .await;

        let err = test_client(server.uri()).fetch().await.unwrap_err();
        match err {
            ExchangeError::Schema { venue, message } => {
                assert_eq!(venue, Venue::Dydx);
                assert!(message.contains("BTC-USD"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/markets"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = test_client(server.uri()).fetch().await.unwrap_err();
        assert!(matches!(err, ExchangeError::Status { .. }));
    }
}
