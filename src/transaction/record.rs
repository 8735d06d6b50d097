//! Records a single transaction against the current balance.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    balance::get_balance,
    category::CategoryTitle,
    stores::{CategoryStore, TransactionStore},
    transaction::{Transaction, TransactionType, validate_value},
};

/// A request to record one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub title: String,
    /// Whether the transaction is an income or an outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money earned or spent.
    pub value: f64,
    /// The title of the category to file the transaction under.
    ///
    /// The category is created if it does not exist yet.
    pub category: CategoryTitle,
}

/// Record `new_transaction`, creating its category if needed.
///
/// An outcome is only recorded if the current total balance covers it, an
/// outcome equal to the total is allowed and leaves a total of zero. The
/// balance is checked before the category is resolved, so a rejected outcome
/// leaves the stores untouched.
///
/// The store calls run on the calling task and block it while they wait for
/// the database. Unlike [import_transactions](crate::import_transactions)
/// there is only one category to resolve, so nothing is moved to the blocking
/// thread pool.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidValue] if the value is negative or not a finite number,
/// - [Error::BalanceViolation] if an outcome is larger than the current total,
/// - or any error from `transaction_store` or `category_store`.
pub async fn record_transaction<T, C>(
    new_transaction: NewTransaction,
    transaction_store: &T,
    category_store: &C,
) -> Result<Transaction, Error>
where
    T: TransactionStore,
    C: CategoryStore,
{
    let value = validate_value(new_transaction.value)?;

    if new_transaction.transaction_type == TransactionType::Outcome {
        let total = get_balance(transaction_store)?.total;

        if total < value {
            tracing::warn!(
                "Rejected outcome \"{}\" of {value}: the total balance is only {total}",
                new_transaction.title
            );
            return Err(Error::BalanceViolation {
                total,
                change: -value,
            });
        }
    }

    let category = category_store.get_or_create(&new_transaction.category)?;

    let transaction = transaction_store.create(Transaction::build(
        &new_transaction.title,
        new_transaction.transaction_type,
        value,
        category.id,
    ))?;

    tracing::info!(
        "Recorded {} \"{}\" of {} under \"{}\"",
        transaction.transaction_type,
        transaction.title,
        transaction.value,
        category.title
    );

    Ok(transaction)
}
