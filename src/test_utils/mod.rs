#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    category::CategoryTitle,
    db::initialize,
    stores::{
        CategoryStore, TransactionStore,
        sqlite::{SQLiteCategoryStore, SQLiteTransactionStore, create_sqlite_stores},
    },
    transaction::{Transaction, TransactionType},
};

/// Stores backed by a fresh in-memory database.
pub(crate) fn get_test_stores() -> (SQLiteTransactionStore, SQLiteCategoryStore) {
    let connection = Connection::open_in_memory().unwrap();
    initialize(&connection).unwrap();

    create_sqlite_stores(Arc::new(Mutex::new(connection)))
}

/// Record one income of `income` and one outcome of `outcome` under the
/// category "Seed".
pub(crate) fn seed_balance(
    transaction_store: &SQLiteTransactionStore,
    category_store: &SQLiteCategoryStore,
    income: f64,
    outcome: f64,
) {
    let category = category_store
        .get_or_create(&CategoryTitle::new_unchecked("Seed"))
        .expect("Could not create seed category");

    transaction_store
        .create(Transaction::build(
            "Seed income",
            TransactionType::Income,
            income,
            category.id,
        ))
        .expect("Could not create seed income");
    transaction_store
        .create(Transaction::build(
            "Seed outcome",
            TransactionType::Outcome,
            outcome,
            category.id,
        ))
        .expect("Could not create seed outcome");
}
