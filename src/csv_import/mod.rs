//! Bulk importing transactions from CSV files.

mod csv;
mod import_transactions;

pub use self::csv::{ImportRow, parse_csv, parse_csv_file};
pub use import_transactions::import_transactions;
