//! The operations exposed to the routing layer.
//!
//! Every function takes the store explicitly and reports a [`TriviaError`] kind;
//! choosing HTTP statuses is left to the caller.

use {
    rand::Rng,
    crate::models::{
        quiz,
        page::{Page, Paged},
        error::{TriviaError, TriviaResult},
        store::{CategorySelector, TriviaStore},
        db::{
            CategoryId,
            QuestionId,
            models::{Category, Question, NewQuestion}
        }
    }
};

pub const DIFFICULTIES: std::ops::RangeInclusive<i32> = 1..=5;

pub fn list_categories<S: TriviaStore + ?Sized>(store: &mut S) -> TriviaResult<Vec<Category>> {
    Ok(store.categories()?)
}

/// A page of all questions. Pages past the end are empty, not an error.
pub fn list_questions<S: TriviaStore + ?Sized>(store: &mut S, page: Page) -> TriviaResult<Paged<Question>> {
    let paged = store.question_page(CategorySelector::All, page)?;
    tracing::debug!(page = page.number(), returned = paged.items.len(), total = paged.total, "listed questions");
    Ok(paged)
}

pub fn questions_by_category<S: TriviaStore + ?Sized>(store: &mut S, id: CategoryId, page: Page) -> TriviaResult<(Category, Paged<Question>)> {
    let category = store.category(id)?
        .ok_or(TriviaError::CategoryNotFound(id))?;
    let paged = store.question_page(CategorySelector::Only(id), page)?;
    Ok((category, paged))
}

pub fn delete_question<S: TriviaStore + ?Sized>(store: &mut S, id: QuestionId) -> TriviaResult<()> {
    if store.delete_question(id)? {
        tracing::info!(question_id = id, "question deleted");
        Ok(())
    } else {
        Err(TriviaError::QuestionNotFound(id))
    }
}

pub fn create_question<S: TriviaStore + ?Sized>(store: &mut S, new: NewQuestion) -> TriviaResult<Question> {
    validate(store, &new)?;
    let created = store.insert_question(&new)?;
    tracing::info!(question_id = created.id, category_id = created.category_id, "question created");
    Ok(created)
}

pub fn update_question<S: TriviaStore + ?Sized>(store: &mut S, id: QuestionId, changes: NewQuestion) -> TriviaResult<Question> {
    validate(store, &changes)?;
    let updated = store.update_question(id, &changes)?
        .ok_or(TriviaError::QuestionNotFound(id))?;
    tracing::info!(question_id = id, "question updated");
    Ok(updated)
}

/// Questions whose text contains `term`, ignoring case. A blank term is rejected.
pub fn search_questions<S: TriviaStore + ?Sized>(store: &mut S, term: &str) -> TriviaResult<Vec<Question>> {
    if term.trim().is_empty() {
        return Err(TriviaError::validation("search term must not be empty"));
    }
    let found = store.search(term)?;
    tracing::debug!(term, found = found.len(), "searched questions");
    Ok(found)
}

pub fn next_quiz_question<S, R>(store: &mut S, selector: CategorySelector, previous: &[QuestionId], rng: &mut R) -> TriviaResult<Option<Question>>
where
    S: TriviaStore + ?Sized,
    R: Rng + ?Sized
{
    quiz::next_question(store, selector, previous, rng)
}

fn validate<S: TriviaStore + ?Sized>(store: &mut S, new: &NewQuestion) -> TriviaResult<()> {
    if new.question.trim().is_empty() {
        return Err(TriviaError::validation("question text must not be empty"));
    }
    if new.answer.trim().is_empty() {
        return Err(TriviaError::validation("answer must not be empty"));
    }
    if !DIFFICULTIES.contains(&new.difficulty) {
        return Err(TriviaError::validation(format!(
            "difficulty must be between {} and {}",
            DIFFICULTIES.start(),
            DIFFICULTIES.end()
        )));
    }
    if store.category(new.category_id)?.is_none() {
        return Err(TriviaError::validation(format!("category {} does not exist", new.category_id)));
    }
    Ok(())
}
