//! Sets up the application's SQLite database.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Create the tables for the domain models if they do not already exist.
///
/// Foreign key enforcement is switched on for `connection` so that a
/// transaction cannot reference a category that does not exist.
///
/// # Errors
/// Returns an [Error::SqlError] if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Open the SQLite database at `db_path`, initialize it and wrap the
/// connection so that it can be shared between stores.
///
/// # Errors
/// Returns an [Error::SqlError] if the database cannot be opened or initialized.
pub fn open_shared_connection(db_path: &Path) -> Result<Arc<Mutex<Connection>>, Error> {
    tracing::debug!("Opening database at {db_path:?}");
    let connection = Connection::open(db_path)?;
    initialize(&connection)?;

    Ok(Arc::new(Mutex::new(connection)))
}
