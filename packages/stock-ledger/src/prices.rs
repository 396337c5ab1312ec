//! Fixed price table.

use crate::{Error, Result};

/// Compiled-in unit prices.
pub const BUILTIN_PRICES: &[(&str, i64)] = &[
    ("AAPL", 180),
    ("TSLA", 250),
    ("GOOG", 140),
    ("AMZN", 130),
    ("MSFT", 330),
];

/// Immutable mapping from stock symbol to unit price.
///
/// Symbols are stored uppercase and kept in construction order, so
/// `symbols()` and `iter()` are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    entries: Vec<(String, i64)>,
}

impl PriceTable {
    /// The compiled-in price table.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PRICES
                .iter()
                .map(|(symbol, price)| (symbol.to_string(), *price))
                .collect(),
        }
    }

    /// Build a table from explicit entries.
    ///
    /// Symbols are trimmed and upper-cased. Empty symbols, duplicates,
    /// symbols containing CSV delimiters, and non-positive prices are rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut table: Vec<(String, i64)> = Vec::new();

        for (symbol, price) in entries {
            let symbol = symbol.as_ref().trim().to_uppercase();

            if symbol.is_empty() {
                return Err(Error::InvalidPriceTable("empty symbol".to_string()));
            }
            if symbol.contains([',', '"', '\r', '\n']) {
                return Err(Error::InvalidPriceTable(format!(
                    "symbol {:?} contains a CSV delimiter",
                    symbol
                )));
            }
            if price <= 0 {
                return Err(Error::InvalidPriceTable(format!(
                    "price for {} must be positive, got {}",
                    symbol, price
                )));
            }
            if table.iter().any(|(s, _)| *s == symbol) {
                return Err(Error::InvalidPriceTable(format!(
                    "duplicate symbol {}",
                    symbol
                )));
            }

            table.push((symbol, price));
        }

        Ok(Self { entries: table })
    }

    /// Look up the unit price of a symbol (case-insensitive).
    pub fn price_of(&self, symbol: &str) -> Option<i64> {
        let symbol_upper = symbol.trim().to_uppercase();
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol_upper)
            .map(|(_, price)| *price)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.price_of(symbol).is_some()
    }

    /// All symbols in table order.
    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|(s, _)| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(s, p)| (s.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::builtin()
    }
}
