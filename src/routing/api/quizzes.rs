use {
    serde::{Serialize, Deserialize},
    rocket::{post, serde::json::Json},
    crate::models::{
        trivia,
        store::CategorySelector,
        web::{ApiResult, LenientId},
        db::{
            DbConn,
            QuestionId,
            models::Question
        }
    }
};

#[derive(Deserialize, Debug)]
pub struct QuizCategory {
    id: LenientId
}

#[derive(Deserialize, Debug)]
pub struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<QuestionId>,
    /// Absent or id `0` means every category.
    #[serde(default)]
    quiz_category: Option<QuizCategory>
}

impl QuizRequest {
    fn selector(&self) -> CategorySelector {
        self.quiz_category
            .as_ref()
            .map(|cat| CategorySelector::from_id(cat.id.0))
            .unwrap_or(CategorySelector::All)
    }
}

#[derive(Serialize, Debug)]
pub struct NextQuestion {
    success: bool,
    /// `null` once every question in scope has been played.
    question: Option<Question>,
    previous_questions: Vec<QuestionId>
}

#[post("/quizzes", data = "<request>")]
pub async fn next_question(request: Json<QuizRequest>, conn: DbConn) -> ApiResult<Json<NextQuestion>> {
    let request = request.into_inner();
    let selector = request.selector();
    let previous = request.previous_questions;

    let (question, previous) = conn
        .store(move |c| {
            trivia::next_quiz_question(c, selector, &previous, &mut rand::thread_rng())
                .map(|question| (question, previous))
        })
        .await?;

    Ok(Json(NextQuestion {
        success: true,
        question,
        previous_questions: previous
    }))
}

#[cfg(test)]
mod test {
    use {
        serde_json::{json, Value},
        rocket::{
            http::Status,
            local::blocking::Client
        },
        pretty_assertions::assert_eq,
        crate::test::client
    };

    fn add(client: &Client, text: &str, category: i32) -> i64 {
        client.post("/questions")
            .json(&json!({ "question": text, "answer": "Yes", "difficulty": 1, "category": category }))
            .dispatch()
            .into_json::<Value>()
            .and_then(|body| body["created"].as_i64())
            .unwrap()
    }

    fn quiz(client: &Client, body: Value) -> (Status, Value) {
        let res = client.post("/quizzes").json(&body).dispatch();
        (res.status(), res.into_json::<Value>().unwrap())
    }

    #[test]
    fn serves_unseen_question_from_category() {
        let client = client();
        let first = add(&client, "Science one?", 1);
        let second = add(&client, "Science two?", 1);
        add(&client, "Art one?", 2);

        let (status, body) = quiz(&client, json!({
            "previous_questions": [first],
            "quiz_category": { "type": "Science", "id": "1" }
        }));

        assert_eq!(status, Status::Ok);
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["id"], second);
        assert_eq!(body["question"]["category"], 1);
        assert_eq!(body["previous_questions"], json!([first]));
    }

    #[test]
    fn exhausted_quiz_returns_null() {
        let client = client();
        let ids = (0..3)
            .map(|n| add(&client, &format!("Q{n}?"), 1))
            .collect::<Vec<_>>();

        let (status, body) = quiz(&client, json!({
            "previous_questions": ids,
            "quiz_category": { "type": "Science", "id": 1 }
        }));

        assert_eq!(status, Status::Ok);
        assert_eq!(body["question"], Value::Null);
    }

    #[test]
    fn category_zero_plays_everything() {
        let client = client();
        let ids = [add(&client, "Science?", 1), add(&client, "Art?", 2), add(&client, "Sports?", 6)];

        let mut previous = Vec::new();
        loop {
            let (_, body) = quiz(&client, json!({
                "previous_questions": previous,
                "quiz_category": { "type": "click", "id": 0 }
            }));
            match body["question"]["id"].as_i64() {
                Some(id) => {
                    assert!(!previous.contains(&id));
                    previous.push(id);
                }
                None => break
            }
        }

        previous.sort_unstable();
        assert_eq!(previous, ids);
    }

    #[test]
    fn missing_category_means_all() {
        let client = client();
        let id = add(&client, "Anything?", 4);

        let (status, body) = quiz(&client, json!({ "previous_questions": [] }));
        assert_eq!(status, Status::Ok);
        assert_eq!(body["question"]["id"], id);
    }

    #[test]
    fn unknown_category_is_not_found() {
        let client = client();
        add(&client, "Anything?", 4);

        let (status, body) = quiz(&client, json!({
            "previous_questions": [6],
            "quiz_category": { "type": "404", "id": "404" }
        }));

        assert_eq!(status, Status::NotFound);
        assert_eq!(body["success"], false);
    }
}
