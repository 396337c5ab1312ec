//! Text rendering of ledger summaries.

use crate::types::{HoldingLine, Summary};

/// Heading printed above the holding rows.
pub const SUMMARY_HEADING: &str = "Portfolio Summary:";

/// Format one holding as a fixed-width row.
///
/// The symbol is padded or truncated to six characters, quantity and
/// price are left-justified in four-character fields.
pub fn format_line(line: &HoldingLine, currency: &str) -> String {
    format!(
        "{:<6.6} | Qty: {:<4} | Price: {}{:<4} | Value: {}{}",
        line.symbol, line.quantity, currency, line.unit_price, currency, line.line_value
    )
}

/// Format the full summary: heading, blank line, one row per holding.
pub fn format_summary(summary: &Summary, currency: &str) -> String {
    let mut out = format!("{}\n\n", SUMMARY_HEADING);
    for line in &summary.lines {
        out.push_str(&format_line(line, currency));
        out.push('\n');
    }
    out
}

pub fn format_total(total: i128, currency: &str) -> String {
    format!("Total Investment: {}{}", currency, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Holding;

    #[test]
    fn test_format_line() {
        let line = Holding::new("AAPL", 3).with_price(180);
        assert_eq!(
            format_line(&line, "$"),
            "AAPL   | Qty: 3    | Price: $180  | Value: $540"
        );
    }

    #[test]
    fn test_format_line_truncates_long_symbol() {
        let line = HoldingLine {
            symbol: "LONGSYMBOL".to_string(),
            quantity: 12345,
            unit_price: 10,
            line_value: 123450,
        };
        assert_eq!(
            format_line(&line, "$"),
            "LONGSY | Qty: 12345 | Price: $10   | Value: $123450"
        );
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary::from_lines(vec![
            Holding::new("AAPL", 3).with_price(180),
            Holding::new("TSLA", 2).with_price(250),
        ]);

        let text = format_summary(&summary, "$");
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "Portfolio Summary:");
        assert_eq!(rows[1], "");
        assert!(rows[2].starts_with("AAPL "));
        assert!(rows[3].starts_with("TSLA "));
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_format_empty_summary() {
        assert_eq!(format_summary(&Summary::default(), "$"), "Portfolio Summary:\n\n");
        assert_eq!(format_total(0, "$"), "Total Investment: $0");
    }

    #[test]
    fn test_format_total_currency() {
        assert_eq!(format_total(1040, "EUR "), "Total Investment: EUR 1040");
    }
}
