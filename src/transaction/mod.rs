//! Recording income and outcome transactions.

mod core;
mod record;

pub use self::core::{
    Transaction, TransactionBuilder, TransactionId, TransactionType, create_transaction,
    create_transaction_table, get_all_transactions,
};
pub(crate) use self::core::validate_value;
pub use record::{NewTransaction, record_transaction};
