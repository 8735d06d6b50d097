//! Implements the stores on top of a shared SQLite connection.

mod category;
mod transaction;

pub use category::SQLiteCategoryStore;
pub use transaction::SQLiteTransactionStore;

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::Error;

/// Create a transaction store and a category store that share `connection`.
///
/// The database should already be initialized, e.g. with
/// [initialize_db](crate::initialize_db).
pub fn create_sqlite_stores(
    connection: Arc<Mutex<Connection>>,
) -> (SQLiteTransactionStore, SQLiteCategoryStore) {
    (
        SQLiteTransactionStore::new(connection.clone()),
        SQLiteCategoryStore::new(connection),
    )
}

fn lock_connection(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
