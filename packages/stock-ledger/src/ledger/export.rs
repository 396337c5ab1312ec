//! CSV export of the ledger summary.

use super::tracker::Ledger;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Header row of the exported file.
pub const CSV_HEADER: [&str; 4] = ["Stock", "Quantity", "Price", "Value"];

/// Label of the trailing total row.
pub const TOTAL_LABEL: &str = "Total Investment";

const LINE_END: &str = "\r\n";

impl Ledger {
    /// Render the summary as CSV text.
    ///
    /// Layout: header, one row per holding, an empty separator row, then
    /// `Total Investment,,,<total>`.
    pub fn to_csv(&self) -> String {
        let summary = self.render_summary();
        let mut out = String::new();

        write_row(&mut out, &CSV_HEADER);
        for line in &summary.lines {
            write_row(
                &mut out,
                &[
                    line.symbol.as_str(),
                    &line.quantity.to_string(),
                    &line.unit_price.to_string(),
                    &line.line_value.to_string(),
                ],
            );
        }
        out.push_str(LINE_END);
        write_row(&mut out, &[TOTAL_LABEL, "", "", &summary.total.to_string()]);

        out
    }

    /// Write the summary to `path`, replacing any existing file.
    ///
    /// Fails with [`Error::EmptyPortfolio`] before touching the filesystem
    /// when there are no holdings. Missing parent directories are created.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        if self.is_empty() {
            return Err(Error::EmptyPortfolio);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_csv())?;
        tracing::info!("Exported {} holdings to {}", self.len(), path.display());
        Ok(path.to_path_buf())
    }
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push_str(LINE_END);
}

fn write_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
