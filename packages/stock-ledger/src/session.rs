//! Command session driving a [`Ledger`].
//!
//! A session plays the role a window would: it collects raw symbol and
//! quantity text, forwards it to the ledger, turns every outcome into a
//! user-facing [`Notice`], and refreshes the summary [`Display`] after
//! each successful mutation. Nothing here depends on a rendering toolkit,
//! so the whole flow is testable with plain strings.

use crate::config::SessionConfig;
use crate::format::{format_summary, format_total};
use crate::ledger::Ledger;
use crate::types::LedgerState;
use crate::Error;
use serde::Serialize;

const HELP: &str = "Commands:
  add <SYMBOL> <QTY>   add shares of a listed stock
  show                 print the portfolio summary
  total                print the total investment
  prices               list known stocks and prices
  save                 export the summary to data/portfolio.csv
  clear                remove all holdings
  help                 show this message
  quit                 leave the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add shares; missing fields are passed through as empty text
    Add { symbol: String, quantity: String },
    Show,
    Total,
    Prices,
    /// Export to the configured file
    Save,
    Clear,
    Help,
    Quit,
    /// Blank input line
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse one input line. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Command::Empty;
        };

        match keyword.to_lowercase().as_str() {
            "add" => {
                let symbol = parts.next().unwrap_or_default().to_string();
                let quantity = parts.collect::<Vec<_>>().join(" ");
                Command::Add { symbol, quantity }
            }
            "show" | "summary" => Command::Show,
            "total" => Command::Total,
            "prices" => Command::Prices,
            // The export file is fixed, so arguments are not accepted
            "save" | "export" if parts.next().is_none() => Command::Save,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message for the user, the equivalent of a modal dialog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }

    /// Map a ledger error to the notice shown for it.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::EmptyInput => {
                Self::warning("Input Error", "Please enter both stock symbol and quantity.")
            }
            Error::UnknownSymbol(symbol) => {
                Self::error("Invalid Stock", format!("'{}' not found in stock list.", symbol))
            }
            Error::InvalidQuantity(_) => Self::warning("Input Error", "Quantity must be a number."),
            Error::QuantityOverflow(symbol) => {
                Self::warning("Input Error", format!("Quantity for {} is too large.", symbol))
            }
            Error::EmptyPortfolio => Self::info("Empty Portfolio", "No stocks to save."),
            Error::Io(e) => Self::error("Save Failed", e.to_string()),
            other => Self::error("Error", other.to_string()),
        }
    }
}

/// Refreshed summary text, shown after a successful mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Display {
    pub state: LedgerState,
    /// Heading plus one fixed-width row per holding
    pub summary: String,
    /// Total investment label
    pub total: String,
}

/// Outcome of one command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Reply {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    /// Set when the session should end
    #[serde(skip)]
    pub exit: bool,
}

impl Reply {
    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Default::default()
        }
    }

    /// True when no warning or error notice was raised.
    pub fn is_ok(&self) -> bool {
        self.notices.iter().all(|n| n.severity == Severity::Info)
    }

    /// Messages of all warning and error notices, joined.
    pub fn error_message(&self) -> Option<String> {
        let messages: Vec<&str> = self
            .notices
            .iter()
            .filter(|n| n.severity != Severity::Info)
            .map(|n| n.message.as_str())
            .collect();
        if messages.is_empty() {
            None
        } else {
            Some(messages.join("\n"))
        }
    }

    /// Plain text rendering for a terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for notice in &self.notices {
            let tag = match notice.severity {
                Severity::Info => "info",
                Severity::Warning => "warning",
                Severity::Error => "error",
            };
            out.push_str(&format!("[{}] {}: {}\n", tag, notice.title, notice.message));
        }
        if let Some(display) = &self.display {
            out.push_str(&display.summary);
            out.push_str(&display.total);
            out.push('\n');
        }
        out
    }
}

/// Interactive session over a single ledger.
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    config: SessionConfig,
}

impl Session {
    pub fn new(ledger: Ledger, config: SessionConfig) -> Self {
        Self { ledger, config }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.execute(Command::parse(line))
    }

    /// Run one command against the ledger.
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Add { symbol, quantity } => match self.ledger.add_holding(&symbol, &quantity) {
                Ok(_) => Reply {
                    display: Some(self.display()),
                    ..Default::default()
                },
                Err(e) => Reply::notice(Notice::from_error(&e)),
            },
            Command::Show => Reply {
                display: Some(self.display()),
                ..Default::default()
            },
            Command::Total => Reply::notice(Notice::info(
                "Total",
                format_total(self.ledger.total_value(), &self.config.currency),
            )),
            Command::Prices => {
                let listing: Vec<String> = self
                    .ledger
                    .prices()
                    .iter()
                    .map(|(symbol, price)| format!("{:<6} {}{}", symbol, self.config.currency, price))
                    .collect();
                Reply::notice(Notice::info("Prices", listing.join("\n")))
            }
            Command::Save => {
                let path = &self.config.export_path;
                match self.ledger.export_csv(path) {
                    Ok(written) => Reply::notice(Notice::info(
                        "Saved",
                        format!("Portfolio saved successfully in:\n{}", written.display()),
                    )),
                    Err(e) => {
                        if let Error::Io(io) = &e {
                            tracing::warn!("Export to {} failed: {}", path.display(), io);
                        }
                        Reply::notice(Notice::from_error(&e))
                    }
                }
            }
            Command::Clear => {
                self.ledger.clear();
                Reply {
                    notices: vec![Notice::info("Cleared", "Portfolio cleared successfully.")],
                    display: Some(self.display()),
                    exit: false,
                }
            }
            Command::Help => Reply::notice(Notice::info("Help", HELP)),
            Command::Quit => Reply {
                exit: true,
                ..Default::default()
            },
            Command::Empty => Reply::default(),
            Command::Unknown(keyword) => Reply::notice(Notice::warning(
                "Unknown Command",
                format!("'{}' is not a command. Type 'help' for a list.", keyword),
            )),
        }
    }

    /// Current summary display.
    pub fn display(&self) -> Display {
        let summary = self.ledger.render_summary();
        Display {
            state: self.ledger.state(),
            summary: format_summary(&summary, &self.config.currency),
            total: format_total(summary.total, &self.config.currency),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Ledger::with_builtin_prices(), SessionConfig::default())
    }
}
