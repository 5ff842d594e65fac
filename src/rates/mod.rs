//! Funding rate normalization and cross-venue analysis.
//!
//! Each venue reports funding in its own unit and cadence; everything here
//! operates on rates already normalized into a [`RateTable`]. The analysis
//! pipeline is pure and synchronous: tables in, pairwise difference series
//! out, reduced to one best discrepancy per asset.

mod diff;
mod select;
mod table;

pub use diff::{diff_tables, DifferenceSeries};
pub use select::{rank, select_best, BestDiscrepancy};
pub use table::{normalize_symbol, FundingRate, RateTable};
