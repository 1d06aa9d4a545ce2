use {
    serde::Serialize,
    std::collections::BTreeMap,
    rocket::{get, serde::json::Json},
    super::category_map,
    crate::models::{
        trivia,
        page::Page,
        web::ApiResult,
        db::{DbConn, CategoryId, models::Question}
    }
};

#[derive(Serialize, Debug)]
pub struct CategoryList {
    success: bool,
    categories: BTreeMap<CategoryId, String>
}

#[get("/categories")]
pub async fn all_categories(conn: DbConn) -> ApiResult<Json<CategoryList>> {
    let categories = conn.store(|c| trivia::list_categories(c)).await?;

    Ok(Json(CategoryList {
        success: true,
        categories: category_map(categories)
    }))
}

#[derive(Serialize, Debug)]
pub struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: String
}

#[get("/categories/<id>/questions?<page>")]
pub async fn questions_in_category(id: CategoryId, page: Option<u32>, conn: DbConn) -> ApiResult<Json<CategoryQuestions>> {
    let page = Page::from_query(page);
    let (category, paged) = conn
        .store(move |c| trivia::questions_by_category(c, id, page))
        .await?;

    Ok(Json(CategoryQuestions {
        success: true,
        questions: paged.items,
        total_questions: paged.total,
        current_category: category.label
    }))
}
