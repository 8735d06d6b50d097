//! Imports a batch of transactions against the current balance.

use std::collections::{HashMap, HashSet};

use tokio::task::JoinSet;

use crate::{
    Error,
    balance::get_balance,
    category::{Category, CategoryTitle},
    csv_import::ImportRow,
    stores::{CategoryStore, TransactionStore},
    transaction::{Transaction, validate_value},
};

/// Import `rows` as transactions, creating any categories they reference.
///
/// The balance is checked once for the whole batch: the import is accepted
/// when the current total plus the signed sum of all rows is not negative,
/// regardless of the order of the rows. Categories are resolved as
/// concurrent tasks that all finish before the first transaction is written.
///
/// Returns the created transactions in the same order as `rows`.
///
/// There is no rollback. If a store operation fails after the balance check,
/// the categories and transactions created before the failure stay.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidValue] if any row has a negative or non-finite value, or
///   the values are too large to add up to a finite total,
/// - [Error::BalanceViolation] if the batch would make the total negative,
/// - [Error::TaskFailed] if a category task panicked,
/// - or any error from `transaction_store` or `category_store`.
pub async fn import_transactions<T, C>(
    rows: Vec<ImportRow>,
    transaction_store: &T,
    category_store: &C,
) -> Result<Vec<Transaction>, Error>
where
    T: TransactionStore,
    C: CategoryStore + Clone + Send + 'static,
{
    let start_time = std::time::Instant::now();

    for row in &rows {
        validate_value(row.value)?;
    }

    let value_sum: f64 = rows
        .iter()
        .map(|row| row.transaction_type.signed_value(row.value))
        .sum();
    let total = get_balance(transaction_store)?.total;

    if !(total + value_sum).is_finite() {
        tracing::warn!(
            "Rejected import of {} transactions: the values overflow the total balance",
            rows.len()
        );
        return Err(Error::InvalidValue(value_sum));
    }

    if total + value_sum < 0.0 {
        tracing::warn!(
            "Rejected import of {} transactions: the total balance of {total} would become {}",
            rows.len(),
            total + value_sum
        );
        return Err(Error::BalanceViolation {
            total,
            change: value_sum,
        });
    }

    let categories = resolve_categories(&rows, category_store).await?;

    let mut transactions = Vec::with_capacity(rows.len());

    for row in rows {
        let category = categories.get(&row.category).ok_or_else(|| {
            tracing::error!("Category \"{}\" was not resolved", row.category);
            Error::NotFound
        })?;

        let transaction = transaction_store.create(Transaction::build(
            &row.title,
            row.transaction_type,
            row.value,
            category.id,
        ))?;

        transactions.push(transaction);
    }

    tracing::info!(
        "Imported {} transactions in {} categories in {:.1}ms",
        transactions.len(),
        categories.len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(transactions)
}

/// Get or create the category for every distinct title in `rows`.
///
/// Each title is resolved in its own task on the blocking thread pool. All
/// tasks are joined before returning on success. On the first error the
/// function returns and drops the join set, which cannot abort blocking tasks
/// that are already running: they may still create their categories after
/// the error is returned.
async fn resolve_categories<C>(
    rows: &[ImportRow],
    category_store: &C,
) -> Result<HashMap<CategoryTitle, Category>, Error>
where
    C: CategoryStore + Clone + Send + 'static,
{
    let titles: HashSet<&CategoryTitle> = rows.iter().map(|row| &row.category).collect();
    let mut tasks = JoinSet::new();

    for title in titles {
        let category_store = category_store.clone();
        let title = title.clone();

        tasks.spawn_blocking(move || category_store.get_or_create(&title));
    }

    let mut categories = HashMap::with_capacity(tasks.len());

    while let Some(result) = tasks.join_next().await {
        let category = result??;
        categories.insert(category.title.clone(), category);
    }

    Ok(categories)
}
