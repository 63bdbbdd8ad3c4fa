use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct PostAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct EditAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerItem {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub answer: String,
    pub user_name: String,
    pub question_title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct SingleAnswer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub answer: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_item_field_names() {
        let item = AnswerItem {
            id: Uuid::new_v4(),
            question_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            answer: "use a join".into(),
            user_name: "bob".into(),
            question_title: "sql question".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&item).unwrap();
        // The client keys on "answer", not "body"
        assert_eq!(json["answer"], "use a join");
        assert_eq!(json["question_title"], "sql question");
    }
}
