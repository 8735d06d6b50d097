//! Database operations for categories.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{Category, CategoryTitle},
};

/// Retrieve the category with exactly the title `title`, if it exists.
pub fn get_category_by_title(
    title: &CategoryTitle,
    connection: &Connection,
) -> Result<Option<Category>, Error> {
    connection
        .prepare("SELECT id, title FROM category WHERE title = :title;")?
        .query_row(&[(":title", title.as_ref())], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Get the category titled `title`, creating it first if it does not exist.
///
/// The insert and the lookup are a single get-or-insert: the `UNIQUE`
/// constraint on `category.title` turns a concurrent insert of the same
/// title into a no-op, so every caller gets back the one stored category.
pub fn get_or_create_category(
    title: &CategoryTitle,
    connection: &Connection,
) -> Result<Category, Error> {
    let rows_inserted = connection.execute(
        "INSERT INTO category (title) VALUES (?1) ON CONFLICT(title) DO NOTHING;",
        (title.as_ref(),),
    )?;

    if rows_inserted > 0 {
        tracing::debug!("Created category \"{title}\"");
    }

    connection
        .prepare("SELECT id, title FROM category WHERE title = :title;")?
        .query_one(&[(":title", title.as_ref())], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all categories ordered alphabetically by title.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, title FROM category ORDER BY title ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL UNIQUE
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_title: String = row.get(1)?;
    let title = CategoryTitle::new_unchecked(&raw_title);

    Ok(Category { id, title })
}
