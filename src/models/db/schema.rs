diesel::table! {
    categories (id) {
        id -> Integer,
        label -> Text,
    }
}

diesel::table! {
    questions (id) {
        id -> Integer,
        question -> Text,
        answer -> Text,
        difficulty -> Integer,
        category_id -> Integer,
    }
}

diesel::joinable!(questions -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    questions,
);
