use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub created_at: OffsetDateTime,
}

/// Question row joined with the asker's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub created_at: OffsetDateTime,
    pub user_name: String,
}

impl Question {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: &str,
        tag: &str,
    ) -> anyhow::Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (user_id, title, description, tag)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, description, tag, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(tag)
        .fetch_one(db)
        .await?;
        Ok(question)
    }

    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<QuestionWithUser>> {
        let rows = sqlx::query_as::<_, QuestionWithUser>(
            r#"
            SELECT q.id, q.user_id, q.title, q.description, q.tag, q.created_at,
                   u.username AS user_name
            FROM questions q
            JOIN users u ON u.id = q.user_id
            ORDER BY q.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<QuestionWithUser>> {
        let row = sqlx::query_as::<_, QuestionWithUser>(
            r#"
            SELECT q.id, q.user_id, q.title, q.description, q.tag, q.created_at,
                   u.username AS user_name
            FROM questions q
            JOIN users u ON u.id = q.user_id
            WHERE q.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Owner id only, for the authorize step of update.
    pub async fn owner_of(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Uuid>> {
        let row: Option<(Uuid,)> = sqlx::query_as("SELECT user_id FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row.map(|(user_id,)| user_id))
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: &str,
        description: &str,
        tag: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE questions
            SET title = $2, description = $3, tag = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(tag)
        .execute(db)
        .await?;
        Ok(())
    }
}
