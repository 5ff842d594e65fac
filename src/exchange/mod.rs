//! Venue integrations for funding rate data.
//!
//! ## Aevo
//! Lists perpetual markets, then fans out one funding-rate request per
//! active instrument under a bounded-concurrency cap.
//!
//! ## dYdX v3
//! Single markets call; `nextFundingRate` is embedded per market.
//!
//! ## Hyperliquid
//! Single `metaAndAssetCtxs` call; funding rates are parallel-indexed to
//! the asset universe.

pub mod aevo;
pub mod dydx;
mod error;
pub mod hyperliquid;
mod traits;

pub use aevo::AevoClient;
pub use dydx::DydxClient;
pub use error::ExchangeError;
pub use hyperliquid::HyperliquidClient;
pub use traits::{FundingSource, Venue};
