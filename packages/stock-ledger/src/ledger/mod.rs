//! Portfolio ledger module.
//!
//! Provides holding accumulation, valuation against the price table, and CSV export.

mod export;
mod tracker;

pub use export::{CSV_HEADER, TOTAL_LABEL};
pub use tracker::Ledger;
