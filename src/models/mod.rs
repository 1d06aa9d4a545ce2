pub mod db;
pub mod web;
pub mod page;
pub mod quiz;
pub mod store;
pub mod error;
pub mod trivia;
