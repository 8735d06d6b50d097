//! Finance Tracker records income and outcome transactions, keeps a running
//! balance and files every transaction under a category.
//!
//! This library provides the bookkeeping layer: recording single
//! transactions, bulk importing transactions from CSV files and computing the
//! balance, on top of a SQLite database.

#![warn(missing_docs)]

use serde::Serialize;

mod balance;
mod category;
mod csv_import;
mod database_id;
mod db;
pub mod logging;
pub mod stores;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use balance::{
    Balance, TransactionsWithBalance, compute_balance, get_balance, list_transactions,
};
pub use category::{Category, CategoryId, CategoryTitle};
pub use csv_import::{ImportRow, import_transactions, parse_csv, parse_csv_file};
pub use database_id::DatabaseId;
pub use db::{initialize as initialize_db, open_shared_connection};
pub use transaction::{
    NewTransaction, Transaction, TransactionBuilder, TransactionId, TransactionType,
    record_transaction,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Recording the transaction or importing the batch would bring the
    /// total balance below zero.
    ///
    /// `total` is the balance before the operation and `change` is the
    /// signed amount the operation would have added to it.
    #[error("the total balance of {total} would become negative after applying {change}")]
    BalanceViolation {
        /// The total balance before the operation.
        total: f64,
        /// The signed change the operation would have applied.
        change: f64,
    },

    /// A transaction value was negative, NaN or infinite.
    ///
    /// The direction of a transaction is given by its type, so values are
    /// always non-negative.
    #[error("transaction value must be a non-negative number, got {0}")]
    InvalidValue(f64),

    /// An empty string was used to create a category title.
    #[error("Category title cannot be empty")]
    EmptyCategoryTitle,

    /// A transaction type other than `income` or `outcome` was given.
    #[error("\"{0}\" is not a valid transaction type, expected \"income\" or \"outcome\"")]
    InvalidTransactionType(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("Could not parse the CSV file: {0}")]
    InvalidCSV(String),

    /// The category ID used to create a transaction did not match a valid category.
    #[error("the category ID {0} does not refer to a valid category")]
    InvalidCategory(CategoryId),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A background task panicked or was cancelled before it finished.
    #[error("a background task failed: {0}")]
    TaskFailed(String),

    /// A file could not be read.
    #[error("could not read file: {0}")]
    Io(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl Error {
    /// The HTTP-equivalent status code for this error.
    ///
    /// Errors caused by the caller's input map to 400, missing rows to 404
    /// and everything else to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::BalanceViolation { .. }
            | Error::InvalidValue(_)
            | Error::EmptyCategoryTitle
            | Error::InvalidTransactionType(_)
            | Error::InvalidCSV(_)
            | Error::InvalidCategory(_) => 400,
            Error::NotFound => 404,
            Error::SqlError(_)
            | Error::DatabaseLockError
            | Error::TaskFailed(_)
            | Error::Io(_)
            | Error::JSONSerializationError(_) => 500,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        tracing::error!("a background task failed: {}", value);
        Error::TaskFailed(value.to_string())
    }
}

/// The body reported to a client when an operation fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: &'static str,
    /// The HTTP-equivalent status code, see [Error::status_code].
    pub code: u16,
    /// A human readable description of the error.
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        Self {
            status: "error",
            code: error.status_code(),
            message: error.to_string(),
        }
    }
}
