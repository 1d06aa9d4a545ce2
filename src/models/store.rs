//! Capability interfaces the trivia operations are written against.
//!
//! The service implements both traits for a Diesel [`SqliteConnection`](diesel::SqliteConnection)
//! (see `db::ops`); tests also use an in-memory implementation.

use {
    diesel::QueryResult,
    crate::models::{
        page::{Page, Paged},
        db::{
            CategoryId,
            QuestionId,
            models::{Category, Question, NewQuestion}
        }
    }
};

/// Which questions a query covers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    All,
    Only(CategoryId)
}

impl CategorySelector {
    /// Category id `0` is how clients ask for every category.
    pub fn from_id(id: CategoryId) -> CategorySelector {
        if id == 0 {
            CategorySelector::All
        } else {
            CategorySelector::Only(id)
        }
    }

    pub fn matches(self, question: &Question) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(id) => question.category_id == id
        }
    }
}

/// Unicode-aware case-insensitive substring test shared by every search implementation.
pub fn contains_ignoring_case(text: &str, term: &str) -> bool {
    text.to_lowercase()
        .contains(&term.to_lowercase())
}

pub trait CategoryStore {
    /// All categories, ordered by id.
    fn categories(&mut self) -> QueryResult<Vec<Category>>;

    fn category(&mut self, id: CategoryId) -> QueryResult<Option<Category>>;
}

/// Every listing method returns questions ordered by id.
pub trait QuestionStore {
    fn questions(&mut self, selector: CategorySelector) -> QueryResult<Vec<Question>>;

    fn question_page(&mut self, selector: CategorySelector, page: Page) -> QueryResult<Paged<Question>>;

    fn unseen_questions(&mut self, selector: CategorySelector, seen: &[QuestionId]) -> QueryResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text.
    fn search(&mut self, term: &str) -> QueryResult<Vec<Question>>;

    fn insert_question(&mut self, new: &NewQuestion) -> QueryResult<Question>;

    fn update_question(&mut self, id: QuestionId, changes: &NewQuestion) -> QueryResult<Option<Question>>;

    /// Returns whether a question was removed.
    fn delete_question(&mut self, id: QuestionId) -> QueryResult<bool>;
}

pub trait TriviaStore: QuestionStore + CategoryStore {}

impl <S: QuestionStore + CategoryStore + ?Sized> TriviaStore for S {}
