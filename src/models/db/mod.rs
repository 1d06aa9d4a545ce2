pub mod models;
pub mod schema;
pub mod ops;
mod conn;

pub use conn::{DbConn, Connection, MIGRATIONS, configure, run_migrations};

pub type CategoryId = i32;
pub type QuestionId = i32;
