//! Contains traits and implementations for objects that store the domain models.
//!
//! Operations receive their stores as arguments, any type implementing these
//! traits can stand in for the SQLite backed stores in [sqlite].

mod category;
mod transaction;

pub mod sqlite;

pub use category::CategoryStore;
pub use transaction::TransactionStore;
