//! Configuration for the funding rate scanner.
//!
//! Defaults are compiled in; the CLI overrides the knobs a run cares about.
//! No config file or environment variables are required.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Aevo endpoint and fan-out settings
    #[serde(default)]
    pub aevo: AevoConfig,
    /// dYdX v3 endpoint
    #[serde(default)]
    pub dydx: DydxConfig,
    /// Hyperliquid endpoint
    #[serde(default)]
    pub hyperliquid: HyperliquidConfig,
    /// Report shape
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AevoConfig {
    /// Base URL for the Aevo REST API
    #[serde(default = "default_aevo_base_url")]
    pub base_url: String,
    /// Maximum in-flight funding-rate requests during the per-instrument fan-out
    #[serde(default = "default_max_inflight")]
    pub max_inflight: usize,
    /// Fixed delay slept before each fan-out request fires, to respect the
    /// venue's rate limit
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DydxConfig {
    /// Base URL for the dYdX v3 REST API
    #[serde(default = "default_dydx_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperliquidConfig {
    /// Base URL for the Hyperliquid REST API
    #[serde(default = "default_hyperliquid_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many top and bottom rates to print per venue
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_aevo_base_url() -> String {
    "https://api.aevo.xyz".to_string()
}

fn default_dydx_base_url() -> String {
    "https://api.dydx.exchange".to_string()
}

fn default_hyperliquid_base_url() -> String {
    "https://api.hyperliquid.xyz".to_string()
}

fn default_max_inflight() -> usize {
    20
}

fn default_request_delay_ms() -> u64 {
    500
}

fn default_top_n() -> usize {
    10
}

impl Default for AevoConfig {
    fn default() -> Self {
        Self {
            base_url: default_aevo_base_url(),
            max_inflight: default_max_inflight(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl Default for DydxConfig {
    fn default() -> Self {
        Self {
            base_url: default_dydx_base_url(),
        }
    }
}

impl Default for HyperliquidConfig {
    fn default() -> Self {
        Self {
            base_url: default_hyperliquid_base_url(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.aevo.max_inflight == 0 {
            bail!("aevo.max_inflight must be at least 1");
        }
        if self.report.top_n == 0 {
            bail!("report.top_n must be at least 1");
        }
        Ok(())
    }
}
