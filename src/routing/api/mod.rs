pub mod categories;
pub mod questions;
pub mod quizzes;

pub use {
    categories::*,
    questions::*,
    quizzes::*
};

use {
    std::collections::BTreeMap,
    crate::models::db::{CategoryId, models::Category}
};

/// Categories as the `{id: label}` map clients render their sidebar from.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<CategoryId, String> {
    categories
        .into_iter()
        .map(|cat| (cat.id, cat.label))
        .collect()
}
