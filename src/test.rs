//! Shared fixtures for the test modules.

use {
    once_cell::sync::Lazy,
    rocket::local::blocking::Client,
    diesel::{Connection as _, QueryResult},
    diesel_migrations::MigrationHarness,
    std::sync::{Mutex, MutexGuard, PoisonError},
    crate::models::{
        page::{Page, Paged},
        store::{CategorySelector, CategoryStore, QuestionStore, contains_ignoring_case},
        db::{
            Connection,
            CategoryId,
            QuestionId,
            MIGRATIONS,
            configure,
            models::{Category, Question, NewQuestion}
        }
    }
};

/// A migrated in-memory database; wrap writes in `test_transaction`.
pub static CONN: Lazy<Mutex<Connection>> = Lazy::new(|| {
    let mut conn = Connection::establish(":memory:")
        .expect("in-memory sqlite database");
    configure(&mut conn)
        .expect("connection pragmas");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("migrations apply");
    Mutex::new(conn)
});

pub fn conn() -> MutexGuard<'static, Connection> {
    CONN.lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// A local client backed by its own in-memory database.
pub fn client() -> Client {
    let figment = crate::figment()
        .merge(("log_level", "off"))
        .merge(("cors_allow_origin", "*"))
        .merge(("run_migrations", true))
        .merge(("databases.trivia.url", ":memory:"))
        .merge(("databases.trivia.pool_size", 1));

    Client::tracked(crate::build(figment))
        .expect("valid rocket instance")
}

pub fn sample_question(text: &str, category_id: CategoryId) -> NewQuestion {
    NewQuestion {
        question: text.into(),
        answer: "Answer".into(),
        difficulty: 2,
        category_id
    }
}

const CATEGORIES: [&str; 6] = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

/// Keeps everything in vectors and paginates by slicing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: QuestionId
}

impl MemoryStore {
    /// Holds the same categories the initial migration seeds.
    pub fn seeded() -> MemoryStore {
        MemoryStore {
            categories: CATEGORIES
                .iter()
                .zip(1..)
                .map(|(label, id)| Category { id, label: label.to_string() })
                .collect(),
            next_id: 1,
            ..<_>::default()
        }
    }

    pub fn add(&mut self, text: &str, category_id: CategoryId) -> Question {
        self.insert_question(&sample_question(text, category_id))
            .expect("in-memory insert")
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

impl CategoryStore for MemoryStore {
    fn categories(&mut self) -> QueryResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn category(&mut self, id: CategoryId) -> QueryResult<Option<Category>> {
        Ok(self.categories
            .iter()
            .find(|cat| cat.id == id)
            .cloned())
    }
}

impl QuestionStore for MemoryStore {
    fn questions(&mut self, selector: CategorySelector) -> QueryResult<Vec<Question>> {
        Ok(self.questions
            .iter()
            .filter(|q| selector.matches(q))
            .cloned()
            .collect())
    }

    fn question_page(&mut self, selector: CategorySelector, page: Page) -> QueryResult<Paged<Question>> {
        self.questions(selector)
            .map(|all| Paged::from_slice(&all, page))
    }

    fn unseen_questions(&mut self, selector: CategorySelector, seen: &[QuestionId]) -> QueryResult<Vec<Question>> {
        self.questions(selector)
            .map(|mut all| {
                all.retain(|q| !seen.contains(&q.id));
                all
            })
    }

    fn search(&mut self, term: &str) -> QueryResult<Vec<Question>> {
        Ok(self.questions
            .iter()
            .filter(|q| contains_ignoring_case(&q.question, term))
            .cloned()
            .collect())
    }

    fn insert_question(&mut self, new: &NewQuestion) -> QueryResult<Question> {
        let question = Question {
            id: self.next_id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            difficulty: new.difficulty,
            category_id: new.category_id
        };
        self.next_id += 1;
        self.questions.push(question.clone());
        Ok(question)
    }

    fn update_question(&mut self, id: QuestionId, changes: &NewQuestion) -> QueryResult<Option<Question>> {
        Ok(self.questions
            .iter_mut()
            .find(|q| q.id == id)
            .map(|q| {
                q.question = changes.question.clone();
                q.answer = changes.answer.clone();
                q.difficulty = changes.difficulty;
                q.category_id = changes.category_id;
                q.clone()
            }))
    }

    fn delete_question(&mut self, id: QuestionId) -> QueryResult<bool> {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        Ok(self.questions.len() < before)
    }
}
