//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryTitle},
};

/// Creates and retrieves transaction categories.
pub trait CategoryStore {
    /// Get the category with exactly the title `title`, if there is one.
    fn get_by_title(&self, title: &CategoryTitle) -> Result<Option<Category>, Error>;

    /// Get the category titled `title`, creating it if it does not exist.
    ///
    /// Implementers must make this atomic: concurrent calls with the same
    /// title must all return the same category.
    fn get_or_create(&self, title: &CategoryTitle) -> Result<Category, Error>;

    /// Get all categories.
    fn get_all(&self) -> Result<Vec<Category>, Error>;
}
