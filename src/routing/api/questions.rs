use {
    std::collections::BTreeMap,
    serde::{Serialize, Deserialize},
    rocket::{
        get,
        put,
        post,
        delete,
        http::Status,
        serde::json::Json
    },
    super::category_map,
    crate::models::{
        trivia,
        page::Page,
        error::TriviaError,
        web::{ApiResult, LenientId},
        db::{
            DbConn,
            CategoryId,
            QuestionId,
            models::{Question, NewQuestion}
        }
    }
};

#[derive(Serialize, Debug)]
pub struct QuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<CategoryId, String>,
    current_category: Option<String>
}

#[get("/questions?<page>")]
pub async fn all_questions(page: Option<u32>, conn: DbConn) -> ApiResult<Json<QuestionList>> {
    let page = Page::from_query(page);
    let (paged, categories) = conn
        .store(move |c| {
            let paged = trivia::list_questions(c, page)?;
            let categories = trivia::list_categories(c)?;
            Ok::<_, TriviaError>((paged, categories))
        })
        .await?;

    Ok(Json(QuestionList {
        success: true,
        questions: paged.items,
        total_questions: paged.total,
        categories: category_map(categories),
        current_category: None
    }))
}

#[derive(Serialize, Debug)]
pub struct Deleted {
    success: bool,
    deleted: QuestionId
}

#[delete("/questions/<id>")]
pub async fn delete_question(id: QuestionId, conn: DbConn) -> ApiResult<Json<Deleted>> {
    conn.store(move |c| trivia::delete_question(c, id)).await?;

    Ok(Json(Deleted {
        success: true,
        deleted: id
    }))
}

/// Request body for creating or replacing a question.
#[derive(Deserialize, Debug)]
pub struct QuestionForm {
    question: String,
    answer: String,
    difficulty: i32,
    category: LenientId
}

impl From<QuestionForm> for NewQuestion {
    fn from(form: QuestionForm) -> Self {
        NewQuestion {
            question: form.question,
            answer: form.answer,
            difficulty: form.difficulty,
            category_id: form.category.0
        }
    }
}

#[derive(Serialize, Debug)]
pub struct Created {
    success: bool,
    created: QuestionId,
    question: Question
}

#[post("/questions", data = "<form>")]
pub async fn add_question(form: Json<QuestionForm>, conn: DbConn) -> ApiResult<(Status, Json<Created>)> {
    let new = NewQuestion::from(form.into_inner());
    let question = conn.store(move |c| trivia::create_question(c, new)).await?;

    Ok((Status::Created, Json(Created {
        success: true,
        created: question.id,
        question
    })))
}

#[derive(Serialize, Debug)]
pub struct Updated {
    success: bool,
    question: Question
}

#[put("/questions/<id>", data = "<form>")]
pub async fn edit_question(id: QuestionId, form: Json<QuestionForm>, conn: DbConn) -> ApiResult<Json<Updated>> {
    let changes = NewQuestion::from(form.into_inner());
    let question = conn.store(move |c| trivia::update_question(c, id, changes)).await?;

    Ok(Json(Updated {
        success: true,
        question
    }))
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Search {
    search_term: String
}

#[derive(Serialize, Debug)]
pub struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>
}

#[post("/questions/search", data = "<search>")]
pub async fn search_questions(search: Json<Search>, conn: DbConn) -> ApiResult<Json<SearchResults>> {
    let term = search.into_inner().search_term;
    let questions = conn.store(move |c| trivia::search_questions(c, &term)).await?;

    Ok(Json(SearchResults {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None
    }))
}
