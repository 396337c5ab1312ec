//! Session configuration.

use std::path::PathBuf;

/// Export file written by `save`, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "data/portfolio.csv";

/// Settings for a command session.
///
/// The defaults are fixed; the builders exist for embedding and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where `save` writes
    pub export_path: PathBuf,
    /// Currency symbol prefixed to prices and values
    pub currency: String,
}

impl SessionConfig {
    /// Get the export file path: `data/portfolio.csv`.
    pub fn default_export_path() -> PathBuf {
        PathBuf::from(DEFAULT_EXPORT_PATH)
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            export_path: Self::default_export_path(),
            currency: "$".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_export_path("out/holdings.csv")
            .with_currency("EUR ");

        assert_eq!(config.export_path, PathBuf::from("out/holdings.csv"));
        assert_eq!(config.currency, "EUR ");
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.currency, "$");
        assert_eq!(config.export_path, PathBuf::from("data/portfolio.csv"));
        assert_eq!(SessionConfig::default_export_path(), config.export_path);
    }
}
