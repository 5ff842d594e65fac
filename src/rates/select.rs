//! Reduction of difference series to the single best discrepancy per asset.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::exchange::Venue;
use crate::rates::DifferenceSeries;

/// The largest-magnitude cross-venue difference observed for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestDiscrepancy {
    /// Signed hourly-rate difference (left venue minus right venue).
    pub difference: Decimal,
    /// Venue pair that produced it; `None` only for the zero baseline of an
    /// asset no series ever touched (cannot happen for assets drawn from the
    /// series themselves, since the first series claims the label).
    pub pair: Option<(Venue, Venue)>,
}

impl Default for BestDiscrepancy {
    fn default() -> Self {
        Self {
            difference: Decimal::ZERO,
            pair: None,
        }
    }
}

impl BestDiscrepancy {
    /// Pair label for reporting, "-" when unlabeled.
    pub fn pair_label(&self) -> String {
        match self.pair {
            Some((a, b)) => format!("{a}-{b}"),
            None => "-".to_string(),
        }
    }
}

/// Fold difference series into one [`BestDiscrepancy`] per asset.
///
/// Every asset in the union of series keys starts from a zero, unlabeled
/// baseline. Series are visited in input order; an entry takes over an
/// asset's slot when the slot is still unlabeled or the entry's absolute
/// difference is strictly greater than the current one. Equal magnitudes
/// keep the earlier-seen pair. Pure and idempotent.
pub fn select_best(series: &[DifferenceSeries]) -> HashMap<String, BestDiscrepancy> {
    let mut best: HashMap<String, BestDiscrepancy> = HashMap::new();

    for s in series {
        for symbol in s.diffs.keys() {
            best.entry(symbol.clone()).or_default();
        }
    }

    for s in series {
        for (symbol, &difference) in &s.diffs {
            let current = best
                .get_mut(symbol)
                .expect("every series key was seeded above");
            if current.pair.is_none() || difference.abs() > current.difference.abs() {
                *current = BestDiscrepancy {
                    difference,
                    pair: Some((s.left, s.right)),
                };
            }
        }
    }

    best
}

/// Sort discrepancies descending by signed difference for reporting,
/// with the symbol as a deterministic tie-break.
pub fn rank(best: HashMap<String, BestDiscrepancy>) -> Vec<(String, BestDiscrepancy)> {
    let mut rows: Vec<(String, BestDiscrepancy)> = best.into_iter().collect();
    rows.sort_by(|a, b| {
        b.1.difference
            .cmp(&a.1.difference)
            .then_with(|| a.0.cmp(&b.0))
    });
    rows
}
