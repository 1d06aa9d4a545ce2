//! A JSON trivia API: paginated question listings, per-category views, search,
//! question CRUD and a quiz endpoint that serves random unseen questions.

pub mod config;
pub mod routing;
pub mod models;

#[cfg(test)]
mod test;

use {
    figment::Figment,
    rocket::{Rocket, Build, routes, catchers, fairing::AdHoc},
    crate::{
        config::TriviaConfig,
        models::{db, web::Cors}
    }
};

pub use config::figment;

pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", routes![
            routing::preflight,
            routing::post_categories,
            routing::put_categories,
            routing::delete_categories,
            routing::post_category_questions,
            routing::put_questions,
            routing::delete_questions,
            routing::get_search,
            routing::get_quizzes,
            routing::api::all_categories,
            routing::api::questions_in_category,
            routing::api::all_questions,
            routing::api::add_question,
            routing::api::edit_question,
            routing::api::delete_question,
            routing::api::search_questions,
            routing::api::next_question
        ])
        .register("/", catchers![
            routing::catchers::bad_request,
            routing::catchers::not_found,
            routing::catchers::method_not_allowed,
            routing::catchers::unprocessable,
            routing::catchers::internal_error,
            routing::catchers::fallback
        ])
        .attach(db::DbConn::fairing())
        .attach(AdHoc::try_on_ignite("Database Migrations", db::run_migrations))
        .attach(AdHoc::config::<TriviaConfig>())
        .attach(Cors)
}
