use {
    serde::Serialize,
    diesel::{Identifiable, Queryable, Insertable, AsChangeset},
    super::{CategoryId, QuestionId, schema::{questions, categories}}
};

#[derive(Identifiable, Queryable, Serialize, Clone, PartialEq, Eq, Debug)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    #[serde(rename = "category")]
    pub category_id: CategoryId
}

impl Question {
    pub fn id(&self) -> QuestionId {
        self.id
    }
}

/// Column values for both inserting and replacing a question.
#[derive(Insertable, AsChangeset, Clone, PartialEq, Eq, Debug)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category_id: CategoryId
}

#[derive(Identifiable, Queryable, Serialize, Clone, PartialEq, Eq, Debug)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub label: String
}
