//! Console rendering of rate tables and discrepancy rankings.

use crate::rates::{BestDiscrepancy, FundingRate, RateTable};

const SYMBOL_WIDTH: usize = 12;
const RATE_WIDTH: usize = 14;

fn rate_row(symbol: &str, rate: &FundingRate) -> String {
    format!(
        "{:<sw$} {:>rw$} {:>rw$} {:>rw$}",
        symbol,
        rate.hourly,
        rate.daily,
        rate.annualized,
        sw = SYMBOL_WIDTH,
        rw = RATE_WIDTH,
    )
}

fn rate_header() -> String {
    format!(
        "{:<sw$} {:>rw$} {:>rw$} {:>rw$}",
        "asset",
        "1hr%",
        "24hr%",
        "1yr%",
        sw = SYMBOL_WIDTH,
        rw = RATE_WIDTH,
    )
}

/// Render one venue's top-n and bottom-n hourly rates.
pub fn render_rate_table(table: &RateTable, n: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} assets)\n{}\n",
        table.venue(),
        table.len(),
        rate_header()
    ));

    let sorted = table.sorted_by_hourly();
    if sorted.len() <= 2 * n {
        for (symbol, rate) in &sorted {
            out.push_str(&rate_row(symbol, rate));
            out.push('\n');
        }
        return out;
    }

    for (symbol, rate) in table.top(n) {
        out.push_str(&rate_row(symbol, rate));
        out.push('\n');
    }
    out.push_str("...\n");
    for (symbol, rate) in table.bottom(n) {
        out.push_str(&rate_row(symbol, rate));
        out.push('\n');
    }
    out
}

/// Render the ranked per-asset best-discrepancy table.
pub fn render_discrepancies(rows: &[(String, BestDiscrepancy)]) -> String {
    let mut out = format!(
        "{:<sw$} {:>rw$}   venues\n",
        "asset",
        "1hr% diff",
        sw = SYMBOL_WIDTH,
        rw = RATE_WIDTH,
    );

    for (symbol, best) in rows {
        out.push_str(&format!(
            "{:<sw$} {:>rw$}   {}\n",
            symbol,
            best.difference,
            best.pair_label(),
            sw = SYMBOL_WIDTH,
            rw = RATE_WIDTH,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::Venue;
    use crate::rates::{rank, select_best, diff_tables};
    use rust_decimal_macros::dec;

    fn table(venue: Venue, rows: &[(&str, rust_decimal::Decimal)]) -> RateTable {
        RateTable::from_native(
            venue,
            rows.iter()
                .map(|(s, r)| (s.to_string(), FundingRate::from_hourly(*r))),
        )
    }

    #[test]
    fn test_render_rate_table_small() {
        let t = table(Venue::Aevo, &[("BTC", dec!(0.01)), ("ETH", dec!(0.02))]);
        let rendered = render_rate_table(&t, 10);

        assert!(rendered.contains("Aevo (2 assets)"));
        assert!(rendered.contains("1hr%"));
        // Descending by hourly rate, no elision for small tables
        let eth_pos = rendered.find("ETH").unwrap();
        let btc_pos = rendered.find("BTC").unwrap();
        assert!(eth_pos < btc_pos);
        assert!(!rendered.contains("..."));
    }

    #[test]
    fn test_render_rate_table_elides_middle() {
        let rows: Vec<(String, FundingRate)> = (0..10)
            .map(|i| {
                (
                    format!("A{i}"),
                    FundingRate::from_hourly(rust_decimal::Decimal::from(i)),
                )
            })
            .collect();
        let t = RateTable::from_native(Venue::Dydx, rows);

        let rendered = render_rate_table(&t, 2);
        assert!(rendered.contains("..."));
        assert!(rendered.contains("A9"));
        assert!(rendered.contains("A0"));
        assert!(!rendered.contains("A5"));
    }

    #[test]
    fn test_render_discrepancies() {
        let a = table(Venue::Aevo, &[("BTC", dec!(0.01))]);
        let b = table(Venue::Dydx, &[("BTC", dec!(0.03))]);

        let ranked = rank(select_best(&diff_tables(&[a, b])));
        let rendered = render_discrepancies(&ranked);

        assert!(rendered.contains("BTC"));
        assert!(rendered.contains("-0.02"));
        assert!(rendered.contains("Aevo-dYdX"));
    }
}
