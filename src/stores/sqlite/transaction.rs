//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    stores::{TransactionStore, sqlite::lock_connection},
    transaction::{Transaction, TransactionBuilder, create_transaction, get_all_transactions},
};

/// Stores transactions in a SQLite database.
///
/// Note that because a transaction references a [Category](crate::Category),
/// the category table must be set up in the same database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidCategory] if `category_id` does not refer to a valid category,
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let connection = lock_connection(&self.connection)?;
        create_transaction(builder, &connection)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = lock_connection(&self.connection)?;
        get_all_transactions(&connection)
    }
}

#[cfg(test)]
mod transaction_store_tests {
    use crate::{
        Error,
        category::CategoryTitle,
        stores::{CategoryStore, TransactionStore},
        test_utils::get_test_stores,
        transaction::{Transaction, TransactionType},
    };

    #[test]
    fn create_and_get_all() {
        let (transaction_store, category_store) = get_test_stores();
        let category = category_store
            .get_or_create(&CategoryTitle::new_unchecked("Work"))
            .unwrap();

        let transaction = transaction_store
            .create(Transaction::build(
                "Salary",
                TransactionType::Income,
                500.0,
                category.id,
            ))
            .unwrap();

        assert_eq!(transaction_store.get_all(), Ok(vec![transaction]));
    }

    #[test]
    fn create_with_missing_category_fails() {
        let (transaction_store, _) = get_test_stores();

        let result = transaction_store.create(Transaction::build(
            "Salary",
            TransactionType::Income,
            500.0,
            1337,
        ));

        assert_eq!(result, Err(Error::InvalidCategory(1337)));
    }
}
