//! Holding tracking and valuation.

use crate::prices::PriceTable;
use crate::types::{checked_total, sum_values, Holding, HoldingLine, LedgerState, Summary};
use crate::{Error, Result};
use std::num::IntErrorKind;

/// Ledger that accumulates holdings and values them against a price table.
///
/// Holdings are kept in insertion order, so summaries and exports list
/// symbols in the order they were first added.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Unit prices, fixed for the lifetime of the ledger
    prices: PriceTable,
    /// In-memory holdings
    holdings: Vec<Holding>,
}

impl Ledger {
    /// Create an empty ledger over the given price table.
    pub fn new(prices: PriceTable) -> Self {
        Self {
            prices,
            holdings: Vec::new(),
        }
    }

    /// Create an empty ledger over the compiled-in price table.
    pub fn with_builtin_prices() -> Self {
        Self::new(PriceTable::builtin())
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Get all holdings in insertion order.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Quantity held for a symbol (case-insensitive).
    pub fn quantity_of(&self, symbol: &str) -> Option<i64> {
        let symbol_upper = symbol.trim().to_uppercase();
        self.holdings
            .iter()
            .find(|h| h.symbol == symbol_upper)
            .map(|h| h.quantity)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn state(&self) -> LedgerState {
        if self.holdings.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::NonEmpty
        }
    }

    /// Add shares of a symbol from raw text input.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. both inputs non-empty, else [`Error::EmptyInput`]
    /// 2. symbol is in the price table, else [`Error::UnknownSymbol`]
    /// 3. quantity parses as an integer, else [`Error::InvalidQuantity`]
    ///
    /// Quantities or totals that would not fit the ledger's integer range
    /// fail with [`Error::QuantityOverflow`].
    ///
    /// On success the quantity is added to any existing holding and the
    /// resulting holding is returned. The ledger is untouched on error.
    pub fn add_holding(&mut self, symbol: &str, quantity_text: &str) -> Result<Holding> {
        let symbol_upper = symbol.trim().to_uppercase();

        if symbol_upper.is_empty() || quantity_text.is_empty() {
            tracing::debug!("Rejected add: empty input");
            return Err(Error::EmptyInput);
        }

        let Some(unit_price) = self.prices.price_of(&symbol_upper) else {
            tracing::debug!("Rejected add: unknown symbol {}", symbol_upper);
            return Err(Error::UnknownSymbol(symbol_upper));
        };

        let quantity = parse_quantity(&symbol_upper, quantity_text).map_err(|e| {
            tracing::debug!("Rejected add: quantity {:?}: {}", quantity_text, e);
            e
        })?;

        let existing = self
            .holdings
            .iter()
            .position(|h| h.symbol == symbol_upper);

        let new_quantity = match existing {
            Some(idx) => self.holdings[idx]
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| Error::QuantityOverflow(symbol_upper.clone()))?,
            None => quantity,
        };

        // The running total, in row order, must stay within i128.
        let new_value = i128::from(new_quantity) * i128::from(unit_price);
        let mut values: Vec<i128> = self
            .lines()
            .iter()
            .map(|l| if l.symbol == symbol_upper { new_value } else { l.line_value })
            .collect();
        if existing.is_none() {
            values.push(new_value);
        }
        if checked_total(values).is_none() {
            tracing::debug!("Rejected add: total overflow for {}", symbol_upper);
            return Err(Error::QuantityOverflow(symbol_upper));
        }

        let holding = match existing {
            Some(idx) => {
                self.holdings[idx].quantity = new_quantity;
                self.holdings[idx].clone()
            }
            None => {
                let holding = Holding::new(&symbol_upper, new_quantity);
                self.holdings.push(holding.clone());
                holding
            }
        };

        tracing::debug!(
            "Added {} {} (now {})",
            quantity,
            holding.symbol,
            holding.quantity
        );
        Ok(holding)
    }

    /// Price every holding and compute the total investment.
    pub fn render_summary(&self) -> Summary {
        Summary::from_lines(self.lines())
    }

    /// Sum of quantity * unit price over all holdings.
    pub fn total_value(&self) -> i128 {
        sum_values(self.lines().iter().map(|l| l.line_value))
    }

    /// Remove all holdings.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} holdings", self.holdings.len());
        self.holdings.clear();
    }

    pub(crate) fn lines(&self) -> Vec<HoldingLine> {
        // Every stored symbol was checked against the table on insertion.
        self.holdings
            .iter()
            .filter_map(|h| self.prices.price_of(&h.symbol).map(|p| h.with_price(p)))
            .collect()
    }
}

/// Parse quantity text: surrounding whitespace, an optional sign, and
/// single underscores between digits are accepted.
fn parse_quantity(symbol: &str, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let invalid = || Error::InvalidQuantity(text.to_string());

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with('_') || unsigned.ends_with('_') || unsigned.contains("__") {
        return Err(invalid());
    }

    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();
    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::QuantityOverflow(symbol.to_string())
        }
        _ => invalid(),
    })
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_builtin_prices()
    }
}
