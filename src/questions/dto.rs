use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub msg: String,
    pub question_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct QuestionItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub user_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_tag_is_optional() {
        let req: CreateQuestionRequest =
            serde_json::from_str(r#"{"title":"t","description":"d"}"#).unwrap();
        assert!(req.tag.is_none());

        let req: CreateQuestionRequest =
            serde_json::from_str(r#"{"title":"t","description":"d","tag":"react"}"#).unwrap();
        assert_eq!(req.tag.as_deref(), Some("react"));
    }

    #[test]
    fn question_item_serializes_rfc3339_timestamp() {
        let item = QuestionItem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "How to handle async in React?".into(),
            description: "details".into(),
            tag: "react".into(),
            user_name: "alice".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&item).unwrap();
        let ts = json["created_at"].as_str().unwrap();
        assert!(ts.starts_with("1970-01-01T00:00:00"), "got {ts}");
        assert_eq!(json["user_name"], "alice");
    }
}
