use {
    rand::{Rng, seq::SliceRandom},
    crate::models::{
        error::{TriviaError, TriviaResult},
        store::{CategorySelector, TriviaStore},
        db::{QuestionId, models::Question}
    }
};

/// Picks one candidate, every candidate being equally likely.
pub fn pick<'q, R: Rng + ?Sized>(candidates: &'q [Question], rng: &mut R) -> Option<&'q Question> {
    candidates.choose(rng)
}

/// The next quiz question for `selector` that isn't in `previous`, or `None` once the quiz is exhausted.
///
/// A selector naming an unknown category is an error rather than an empty quiz.
pub fn next_question<S, R>(store: &mut S, selector: CategorySelector, previous: &[QuestionId], rng: &mut R) -> TriviaResult<Option<Question>>
where
    S: TriviaStore + ?Sized,
    R: Rng + ?Sized
{
    if let CategorySelector::Only(id) = selector {
        store.category(id)?
            .ok_or(TriviaError::CategoryNotFound(id))?;
    }

    let candidates = store.unseen_questions(selector, previous)?;
    let next = pick(&candidates, rng).cloned();

    tracing::debug!(
        ?selector,
        previous = previous.len(),
        remaining = candidates.len(),
        picked = ?next.as_ref().map(Question::id),
        "quiz question selected"
    );

    Ok(next)
}
