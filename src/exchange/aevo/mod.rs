//! Aevo venue integration.

mod client;
mod types;

pub use client::AevoClient;
pub use types::{AevoFunding, AevoMarket};
