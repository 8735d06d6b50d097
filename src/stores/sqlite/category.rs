//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    category::{
        Category, CategoryTitle, get_all_categories, get_category_by_title,
        get_or_create_category,
    },
    stores::{CategoryStore, sqlite::lock_connection},
};

/// Creates and retrieves transaction categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    fn get_by_title(&self, title: &CategoryTitle) -> Result<Option<Category>, Error> {
        let connection = lock_connection(&self.connection)?;
        get_category_by_title(title, &connection)
    }

    /// Get or create the category while holding the connection lock.
    ///
    /// The lock serializes callers sharing this connection and the `UNIQUE`
    /// constraint on the title covers other connections to the same file.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error or the
    /// lock is poisoned.
    fn get_or_create(&self, title: &CategoryTitle) -> Result<Category, Error> {
        let connection = lock_connection(&self.connection)?;
        get_or_create_category(title, &connection)
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        let connection = lock_connection(&self.connection)?;
        get_all_categories(&connection)
    }
}
