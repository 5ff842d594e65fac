//! Per-venue funding rate tables.
//!
//! ## Rate unit caveat
//!
//! Aevo reports a true hourly rate, converted here to a percentage and
//! scaled with the x24 / x365 ladder. dYdX v3 and Hyperliquid report a raw
//! per-period value whose documented daily multiplier is 2400, not 24; the
//! raw value is kept as the hourly column and scaled with the x2400 /
//! x2400x365 ladder. The daily and annualized columns are therefore not on
//! the same basis across all venues - the hourly column is the one used for
//! cross-venue comparison. See README for the full discussion.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::exchange::Venue;

/// Funding rate for one asset on one venue at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingRate {
    /// Rate in the venue's hourly column unit.
    pub hourly: Decimal,
    /// Daily-equivalent rate.
    pub daily: Decimal,
    /// Annualized rate.
    pub annualized: Decimal,
}

impl FundingRate {
    /// Build from an hourly percentage: daily = hourly * 24, annualized = daily * 365.
    pub fn from_hourly(hourly: Decimal) -> Self {
        Self::from_period_rate(hourly, dec!(24))
    }

    /// Build from a venue-native per-period rate with the venue's documented
    /// periods-per-day multiplier (2400 for dYdX v3 and Hyperliquid).
    pub fn from_period_rate(rate: Decimal, periods_per_day: Decimal) -> Self {
        let daily = rate * periods_per_day;
        Self {
            hourly: rate,
            daily,
            annualized: daily * dec!(365),
        }
    }
}

/// Derive the cross-venue asset symbol from a venue-native instrument name.
///
/// Truncates at the first `-` so that "BTC-PERP" (Aevo), "BTC-USD" (dYdX)
/// and "BTC" (Hyperliquid) all map to "BTC".
pub fn normalize_symbol(native: &str) -> String {
    match native.split_once('-') {
        Some((base, _)) => base.to_string(),
        None => native.to_string(),
    }
}

/// Snapshot of one venue's funding rates, keyed by normalized asset symbol.
///
/// Constructed once per fetch and immutable thereafter.
#[derive(Debug, Clone)]
pub struct RateTable {
    venue: Venue,
    rates: HashMap<String, FundingRate>,
}

impl RateTable {
    /// Build a table from venue-native instrument names, normalizing each
    /// symbol. Symbols are unique within a table; if two native names
    /// normalize to the same symbol the later entry wins.
    pub fn from_native<I>(venue: Venue, rows: I) -> Self
    where
        I: IntoIterator<Item = (String, FundingRate)>,
    {
        let rates = rows
            .into_iter()
            .map(|(native, rate)| (normalize_symbol(&native), rate))
            .collect();
        Self { venue, rates }
    }

    pub fn venue(&self) -> Venue {
        self.venue
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn get(&self, symbol: &str) -> Option<&FundingRate> {
        self.rates.get(symbol)
    }

    /// Iterate over (symbol, rate) in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FundingRate)> {
        self.rates.iter().map(|(s, r)| (s.as_str(), r))
    }

    /// All entries sorted descending by hourly rate (symbol breaks ties
    /// so the ordering is deterministic).
    pub fn sorted_by_hourly(&self) -> Vec<(&str, &FundingRate)> {
        let mut rows: Vec<(&str, &FundingRate)> = self.iter().collect();
        rows.sort_by(|a, b| b.1.hourly.cmp(&a.1.hourly).then_with(|| a.0.cmp(b.0)));
        rows
    }

    /// The n highest hourly rates, descending.
    pub fn top(&self, n: usize) -> Vec<(&str, &FundingRate)> {
        let mut rows = self.sorted_by_hourly();
        rows.truncate(n);
        rows
    }

    /// The n lowest hourly rates, still in descending order (the tail of
    /// the sorted view).
    pub fn bottom(&self, n: usize) -> Vec<(&str, &FundingRate)> {
        let rows = self.sorted_by_hourly();
        let skip = rows.len().saturating_sub(n);
        rows.into_iter().skip(skip).collect()
    }
}
