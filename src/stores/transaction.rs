//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder},
};

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store, assigning it an ID.
    fn create(&self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the store in the order they were created.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;
}
