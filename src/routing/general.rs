use rocket::{
    get,
    put,
    post,
    delete,
    options,
    http::Status
};

/// Answers CORS preflight requests; the headers come from the CORS fairing.
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

// Rocket forwards a method mismatch to 404, so known paths claim the
// methods they don't serve and answer 405 instead.

#[post("/categories")]
pub fn post_categories() -> Status {
    Status::MethodNotAllowed
}

#[put("/categories")]
pub fn put_categories() -> Status {
    Status::MethodNotAllowed
}

#[delete("/categories")]
pub fn delete_categories() -> Status {
    Status::MethodNotAllowed
}

#[post("/categories/<_>/questions")]
pub fn post_category_questions() -> Status {
    Status::MethodNotAllowed
}

#[put("/questions")]
pub fn put_questions() -> Status {
    Status::MethodNotAllowed
}

#[delete("/questions")]
pub fn delete_questions() -> Status {
    Status::MethodNotAllowed
}

#[get("/questions/search")]
pub fn get_search() -> Status {
    Status::MethodNotAllowed
}

#[get("/quizzes")]
pub fn get_quizzes() -> Status {
    Status::MethodNotAllowed
}
