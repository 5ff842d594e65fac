//! dYdX v3 venue integration.

mod client;
mod types;

pub use client::DydxClient;
pub use types::{DydxMarket, MarketsResponse};
