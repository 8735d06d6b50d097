//! Decodes CSV text into rows ready for import.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryTitle, transaction::TransactionType};

/// One transaction read from a CSV file.
///
/// The CSV file must start with a header naming the columns `title`, `type`,
/// `value` and `category`. Other columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRow {
    /// A text description of what the transaction was for.
    pub title: String,
    /// Either `income` or `outcome`.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money earned or spent.
    pub value: f64,
    /// The title of the category to file the transaction under.
    pub category: CategoryTitle,
}

/// Parses CSV text into [ImportRow]s.
///
/// The first line is treated as the header and whitespace is trimmed from
/// every header and field.
///
/// # Errors
/// Returns [Error::InvalidCSV] if any record is missing a column, has a
/// value that is not a number, an unknown type or an empty category.
pub fn parse_csv(text: &str) -> Result<Vec<ImportRow>, Error> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
        .deserialize()
        .map(|result| {
            result.map_err(|error| {
                tracing::debug!("Failed to parse CSV record: {error}");
                Error::InvalidCSV(error.to_string())
            })
        })
        .collect()
}

/// Reads the file at `path` and parses it with [parse_csv].
///
/// # Errors
/// Returns [Error::Io] if the file cannot be read, otherwise the same errors
/// as [parse_csv].
pub fn parse_csv_file(path: &Path) -> Result<Vec<ImportRow>, Error> {
    let text = std::fs::read_to_string(path).map_err(|error| {
        tracing::error!("Could not read {path:?}: {error}");
        Error::Io(format!("{}: {error}", path.display()))
    })?;

    parse_csv(&text)
}
