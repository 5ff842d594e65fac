//! Pairwise cross-venue rate differencing.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::exchange::Venue;
use crate::rates::RateTable;

/// Signed hourly-rate differences for one ordered venue pair.
///
/// `diffs[symbol] = left.hourly - right.hourly`, computed only over assets
/// listed on both venues.
#[derive(Debug, Clone)]
pub struct DifferenceSeries {
    pub left: Venue,
    pub right: Venue,
    pub diffs: HashMap<String, Decimal>,
}

impl DifferenceSeries {
    /// Label for reporting, e.g. "Aevo-dYdX".
    pub fn pair_label(&self) -> String {
        format!("{}-{}", self.left, self.right)
    }

    pub fn get(&self, symbol: &str) -> Option<Decimal> {
        self.diffs.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }
}

/// Compute one [`DifferenceSeries`] per unordered table pair `(i, j)` with
/// `i < j`, in index order.
///
/// The per-pair join is an intersection: an asset missing from either table
/// is dropped from that pair's series, not treated as zero. Fewer than two
/// tables yields an empty vec.
pub fn diff_tables(tables: &[RateTable]) -> Vec<DifferenceSeries> {
    let mut series = Vec::new();

    for i in 0..tables.len() {
        for j in (i + 1)..tables.len() {
            let (left, right) = (&tables[i], &tables[j]);
            let diffs: HashMap<String, Decimal> = left
                .iter()
                .filter_map(|(symbol, rate)| {
                    right
                        .get(symbol)
                        .map(|other| (symbol.to_string(), rate.hourly - other.hourly))
                })
                .collect();

            series.push(DifferenceSeries {
                left: left.venue(),
                right: right.venue(),
                diffs,
            });
        }
    }

    series
}
