//! Hyperliquid venue integration.

mod client;
mod types;

pub use client::HyperliquidClient;
pub use types::{AssetCtx, AssetMeta, InfoRequest, Meta, MetaAndAssetCtxsResponse};
