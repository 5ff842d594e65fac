//! # Funding Radar
//!
//! Polls perpetual-futures funding rates across Aevo, dYdX v3 and
//! Hyperliquid, normalizes them into per-venue rate tables, and surfaces
//! the largest cross-venue rate discrepancy per asset.
//!
//! ## Architecture
//!
//! - `config`: Endpoints, fan-out limits and report shape
//! - `exchange`: Venue REST clients behind the `FundingSource` trait
//! - `rates`: Rate normalization, pairwise differencing and best-discrepancy
//!   selection (the analysis core; pure and network-free)
//! - `report`: Console table rendering

pub mod config;
pub mod exchange;
pub mod rates;
pub mod report;

pub use config::Config;
