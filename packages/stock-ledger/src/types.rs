//! Core data types for the stock ledger.

use serde::{Deserialize, Serialize};

/// A holding in the portfolio: shares held of one priced symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Holding {
    /// Stock ticker symbol (uppercase)
    pub symbol: String,
    /// Number of shares held. Zero and negative values are allowed.
    pub quantity: i64,
}

impl Holding {
    /// Create a new holding with the given symbol and quantity.
    pub fn new(symbol: &str, quantity: i64) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            quantity,
        }
    }

    /// Price this holding at the given unit price.
    pub fn with_price(&self, unit_price: i64) -> HoldingLine {
        HoldingLine {
            symbol: self.symbol.clone(),
            quantity: self.quantity,
            unit_price,
            line_value: i128::from(self.quantity) * i128::from(unit_price),
        }
    }
}

/// A priced holding, produced transiently for rendering and export.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HoldingLine {
    /// Stock ticker symbol
    pub symbol: String,
    /// Number of shares held
    pub quantity: i64,
    /// Price per share from the price table
    pub unit_price: i64,
    /// quantity * unit_price
    pub line_value: i128,
}

/// Priced view of the whole portfolio.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Summary {
    /// One line per holding, in insertion order
    pub lines: Vec<HoldingLine>,
    /// Sum of all line values
    pub total: i128,
}

impl Summary {
    /// Build a summary from priced lines, computing the total.
    ///
    /// The total saturates at the `i128` bounds; lines taken from a
    /// [`Ledger`](crate::Ledger) always sum exactly.
    pub fn from_lines(lines: Vec<HoldingLine>) -> Self {
        let total = sum_values(lines.iter().map(|l| l.line_value));
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Sum values in order, or `None` if any partial sum leaves `i128`.
pub(crate) fn checked_total(values: impl IntoIterator<Item = i128>) -> Option<i128> {
    values.into_iter().try_fold(0i128, i128::checked_add)
}

pub(crate) fn sum_values(values: impl IntoIterator<Item = i128>) -> i128 {
    values.into_iter().fold(0, i128::saturating_add)
}

/// Observable ledger state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LedgerState {
    Empty,
    NonEmpty,
}

/// API response wrapper used by the JSON output mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_new_uppercases() {
        let holding = Holding::new("aapl", 3);
        assert_eq!(holding.symbol, "AAPL");
        assert_eq!(holding.quantity, 3);
    }

    #[test]
    fn test_holding_with_price() {
        let line = Holding::new("TSLA", 2).with_price(250);
        assert_eq!(line.unit_price, 250);
        assert_eq!(line.line_value, 500);
    }

    #[test]
    fn test_line_value_negative_quantity() {
        let line = Holding::new("AAPL", -4).with_price(180);
        assert_eq!(line.line_value, -720);
    }

    #[test]
    fn test_line_value_does_not_overflow() {
        let line = Holding::new("AAPL", i64::MAX).with_price(330);
        assert_eq!(line.line_value, i128::from(i64::MAX) * 330);
    }

    #[test]
    fn test_summary_from_lines() {
        let summary = Summary::from_lines(vec![
            Holding::new("AAPL", 3).with_price(180),
            Holding::new("TSLA", 2).with_price(250),
        ]);
        assert_eq!(summary.total, 1040);
        assert!(!summary.is_empty());
        assert!(Summary::default().is_empty());
        assert_eq!(Summary::default().total, 0);
    }

    #[test]
    fn test_totals_at_i128_bounds() {
        assert_eq!(checked_total([1, 2, 3]), Some(6));
        assert_eq!(checked_total([i128::MAX, 1]), None);
        assert_eq!(checked_total([i128::MAX, -1, 1]), Some(i128::MAX));
        assert_eq!(sum_values([i128::MAX, 1]), i128::MAX);
        assert_eq!(sum_values([i128::MIN, -1]), i128::MIN);
    }

    #[test]
    fn test_summary_total_does_not_panic() {
        let line = Holding::new("A", i64::MAX).with_price(i64::MAX);
        let summary = Summary::from_lines(vec![line.clone(), line.clone(), line]);
        assert_eq!(summary.total, i128::MAX);
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }

    #[test]
    fn test_ledger_state_serializes_lowercase() {
        let json = serde_json::to_string(&LedgerState::NonEmpty).unwrap();
        assert_eq!(json, "\"nonempty\"");
    }
}
