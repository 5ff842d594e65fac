//! Aevo REST API client.
//!
//! Aevo's market listing does not embed current funding, so a fetch is a
//! discovery call followed by one `/funding` request per live instrument.
//! The fan-out runs under a counting-semaphore admission cap with a fixed
//! pre-request delay to stay inside the venue's rate limit, and results are
//! aggregated in instrument-list order regardless of completion order.

use futures_util::future::try_join_all;
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, instrument};

use super::types::*;
use crate::config::AevoConfig;
use crate::exchange::{ExchangeError, FundingSource, Venue};
use crate::rates::{FundingRate, RateTable};

/// Aevo API client for fetching perpetuals funding data.
#[derive(Debug)]
pub struct AevoClient {
    client: Client,
    base_url: String,
    max_inflight: usize,
    request_delay: Duration,
}

impl AevoClient {
    /// Create a new Aevo client.
    pub fn new(config: &AevoConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ExchangeError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            max_inflight: config.max_inflight.max(1),
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    /// List perpetual markets.
    pub async fn markets(&self) -> Result<Vec<AevoMarket>, ExchangeError> {
        let url = format!(
            "{}/markets?asset=&instrument_type=PERPETUAL",
            self.base_url
        );
        self.get_json(&url).await
    }

    /// Current funding rate for one instrument.
    pub async fn funding_rate(&self, instrument: &str) -> Result<Decimal, ExchangeError> {
        let url = format!("{}/funding?instrument_name={}", self.base_url, instrument);
        let funding: AevoFunding = self.get_json(&url).await?;
        Ok(funding.funding_rate)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ExchangeError> {
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ExchangeError::fetch(url, e))?;

        let status = response.status();
        debug!(%url, %status, "aevo request");
        if !status.is_success() {
            return Err(ExchangeError::status(url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::fetch(url, e))?;
        serde_json::from_str(&body).map_err(|e| ExchangeError::schema(Venue::Aevo, e.to_string()))
    }
}

#[async_trait::async_trait]
impl FundingSource for AevoClient {
    fn venue(&self) -> Venue {
        Venue::Aevo
    }

    #[instrument(skip(self), name = "aevo_fetch")]
    async fn fetch(&self) -> Result<RateTable, ExchangeError> {
        let markets = self.markets().await?;
        let instruments: Vec<String> = markets
            .into_iter()
            .filter(AevoMarket::is_live)
            .map(|m| m.instrument_name)
            .collect();

        debug!(instruments = instruments.len(), "aevo fan-out");

        let semaphore = Semaphore::new(self.max_inflight);
        let rates = try_join_all(instruments.iter().map(|name| {
            let semaphore = &semaphore;
            async move {
                let _permit = semaphore
                    .acquire()
                    .await
                    .expect("semaphore is never closed");
                tokio::time::sleep(self.request_delay).await;
                self.funding_rate(name).await
            }
        }))
        .await?;

        // try_join_all preserves input order, so rates line up with instruments.
        let rows = instruments.into_iter().zip(rates).map(|(name, rate)| {
            // Aevo reports a raw hourly rate; scale to a percentage.
            (name, FundingRate::from_hourly(rate * dec!(100)))
        });

        Ok(RateTable::from_native(Venue::Aevo, rows))
    }
}
