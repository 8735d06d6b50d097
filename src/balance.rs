//! Computes the balance over all recorded transactions.

use serde::Serialize;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionType},
};

/// The aggregate of all transactions.
///
/// `total` is always `income - outcome`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Balance {
    /// The sum of the values of all income transactions.
    pub income: f64,
    /// The sum of the values of all outcome transactions.
    pub outcome: f64,
    /// Income minus outcome.
    pub total: f64,
}

/// All transactions together with the balance they add up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsWithBalance {
    /// Every transaction in the order they were created.
    pub transactions: Vec<Transaction>,
    /// The balance of `transactions`.
    pub balance: Balance,
}

/// Add up `transactions` into a [Balance].
///
/// The order of `transactions` does not matter. An empty slice gives a
/// balance of all zeros.
pub fn compute_balance(transactions: &[Transaction]) -> Balance {
    transactions
        .iter()
        .fold(Balance::default(), |mut balance, transaction| {
            match transaction.transaction_type {
                TransactionType::Income => {
                    balance.income += transaction.value;
                    balance.total += transaction.value;
                }
                TransactionType::Outcome => {
                    balance.outcome += transaction.value;
                    balance.total -= transaction.value;
                }
            }

            balance
        })
}

/// Compute the balance over every transaction in `transaction_store`.
///
/// # Errors
/// Returns any error from the store.
pub fn get_balance<T: TransactionStore>(transaction_store: &T) -> Result<Balance, Error> {
    let transactions = transaction_store.get_all()?;

    Ok(compute_balance(&transactions))
}

/// Get every transaction in `transaction_store` along with their balance.
///
/// # Errors
/// Returns any error from the store.
pub fn list_transactions<T: TransactionStore>(
    transaction_store: &T,
) -> Result<TransactionsWithBalance, Error> {
    let transactions = transaction_store.get_all()?;
    let balance = compute_balance(&transactions);

    Ok(TransactionsWithBalance {
        transactions,
        balance,
    })
}

#[cfg(test)]
mod compute_balance_tests {
    use time::OffsetDateTime;

    use crate::transaction::{Transaction, TransactionType};

    use super::{Balance, compute_balance};

    fn transaction(transaction_type: TransactionType, value: f64) -> Transaction {
        Transaction {
            id: 1,
            title: "Test".to_owned(),
            transaction_type,
            value,
            category_id: 1,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn empty_input_gives_zero_balance() {
        assert_eq!(
            compute_balance(&[]),
            Balance {
                income: 0.0,
                outcome: 0.0,
                total: 0.0
            }
        );
    }

    #[test]
    fn sums_income_and_outcome_separately() {
        let transactions = [
            transaction(TransactionType::Income, 100.0),
            transaction(TransactionType::Outcome, 25.0),
            transaction(TransactionType::Outcome, 15.0),
            transaction(TransactionType::Income, 20.0),
        ];

        let balance = compute_balance(&transactions);

        assert_eq!(
            balance,
            Balance {
                income: 120.0,
                outcome: 40.0,
                total: 80.0
            }
        );
    }

    #[test]
    fn total_is_income_minus_outcome() {
        let values = [3.0, 0.5, 12.0, 7.25, 0.0, 19.0, 4.5];
        let transactions: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let transaction_type = if i % 3 == 0 {
                    TransactionType::Outcome
                } else {
                    TransactionType::Income
                };
                transaction(transaction_type, *value)
            })
            .collect();

        let balance = compute_balance(&transactions);

        assert_eq!(balance.total, balance.income - balance.outcome);
    }

    #[test]
    fn order_does_not_matter() {
        let mut transactions = vec![
            transaction(TransactionType::Income, 10.0),
            transaction(TransactionType::Outcome, 30.0),
            transaction(TransactionType::Income, 50.0),
        ];
        let forwards = compute_balance(&transactions);

        transactions.reverse();
        let backwards = compute_balance(&transactions);

        assert_eq!(forwards, backwards);
    }

    #[test]
    fn outcomes_can_make_total_negative() {
        let balance = compute_balance(&[transaction(TransactionType::Outcome, 5.0)]);

        assert_eq!(balance.total, -5.0);
    }
}
