use {
    diesel::{
        insert_into,
        prelude::*,
        sqlite::Sqlite,
        result::QueryResult
    },
    crate::models::{
        page::{Page, Paged},
        store::{CategorySelector, CategoryStore, QuestionStore, contains_ignoring_case},
        db::{
            schema,
            Connection,
            CategoryId,
            QuestionId,
            models::{Category, Question, NewQuestion}
        }
    }
};

fn scoped(selector: CategorySelector) -> schema::questions::BoxedQuery<'static, Sqlite> {
    use schema::questions::dsl::*;

    let query = questions.into_boxed();
    match selector {
        CategorySelector::All => query,
        CategorySelector::Only(cat) => query.filter(category_id.eq(cat))
    }
}

impl CategoryStore for Connection {
    fn categories(&mut self) -> QueryResult<Vec<Category>> {
        use schema::categories::dsl::*;

        categories
            .order(id.asc())
            .load(self)
    }

    fn category(&mut self, cat: CategoryId) -> QueryResult<Option<Category>> {
        use schema::categories::dsl::*;

        categories
            .find(cat)
            .first(self)
            .optional()
    }
}

impl QuestionStore for Connection {
    fn questions(&mut self, selector: CategorySelector) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        scoped(selector)
            .order(id.asc())
            .load(self)
    }

    fn question_page(&mut self, selector: CategorySelector, page: Page) -> QueryResult<Paged<Question>> {
        use schema::questions::dsl::*;

        let total = scoped(selector)
            .count()
            .get_result::<i64>(self)?;

        let items = scoped(selector)
            .order(id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .load(self)?;

        Ok(Paged { items, total })
    }

    fn unseen_questions(&mut self, selector: CategorySelector, seen: &[QuestionId]) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        scoped(selector)
            .filter(id.ne_all(seen.to_vec()))
            .order(id.asc())
            .load(self)
    }

    fn search(&mut self, term: &str) -> QueryResult<Vec<Question>> {
        // SQLite's LIKE and lower() only fold ASCII, so matching happens here
        self.questions(CategorySelector::All)
            .map(|all| all
                .into_iter()
                .filter(|q| contains_ignoring_case(&q.question, term))
                .collect()
            )
    }

    fn insert_question(&mut self, new: &NewQuestion) -> QueryResult<Question> {
        use schema::questions::dsl::*;

        insert_into(questions)
            .values(new)
            .get_result(self)
    }

    fn update_question(&mut self, question_id: QuestionId, changes: &NewQuestion) -> QueryResult<Option<Question>> {
        use schema::questions::dsl::*;

        diesel::update(questions.find(question_id))
            .set(changes)
            .get_result(self)
            .optional()
    }

    fn delete_question(&mut self, question_id: QuestionId) -> QueryResult<bool> {
        use schema::questions::dsl::*;

        diesel::delete(questions.find(question_id))
            .execute(self)
            .map(|deleted| deleted > 0)
    }
}
