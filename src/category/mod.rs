//! Categories for grouping transactions, unique by title.

mod db;
mod domain;

pub use db::{
    create_category_table, get_all_categories, get_category_by_title, get_or_create_category,
};
pub use domain::{Category, CategoryId, CategoryTitle};
