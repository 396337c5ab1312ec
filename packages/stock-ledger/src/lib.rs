//! Stock Ledger - holdings tracking against a fixed price table.
//!
//! This crate provides:
//!
//! - **Price table**: an immutable symbol to unit price mapping
//! - **Ledger**: accumulates holdings, computes line values and the total investment
//! - **CSV export**: writes the current summary to a flat file
//! - **Session**: a toolkit-free command layer that drives the ledger and renders its output
//!
//! # Example
//!
//! ```rust,no_run
//! use stock_ledger::{Ledger, PriceTable};
//!
//! let mut ledger = Ledger::new(PriceTable::builtin());
//!
//! // Symbols are matched case-insensitively, quantities accumulate
//! ledger.add_holding("aapl", "3")?;
//! ledger.add_holding("tsla", "2")?;
//! assert_eq!(ledger.total_value(), 1040);
//!
//! let path = ledger.export_csv("data/portfolio.csv")?;
//! println!("Saved to {}", path.display());
//! # Ok::<(), stock_ledger::Error>(())
//! ```

pub mod config;
pub mod format;
pub mod ledger;
pub mod prices;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use types::{ApiResponse, Holding, HoldingLine, LedgerState, Summary};

pub use config::SessionConfig;
pub use ledger::Ledger;
pub use prices::PriceTable;
pub use session::{Command, Display, Notice, Reply, Session, Severity};

/// Error types for stock-ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please enter both stock symbol and quantity")]
    EmptyInput,

    #[error("'{0}' not found in stock list")]
    UnknownSymbol(String),

    #[error("Quantity must be a number: {0:?}")]
    InvalidQuantity(String),

    #[error("Quantity overflow for {0}")]
    QuantityOverflow(String),

    #[error("No stocks to save")]
    EmptyPortfolio,

    #[error("Invalid price table: {0}")]
    InvalidPriceTable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stock-ledger operations.
pub type Result<T> = std::result::Result<T, Error>;
