use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: OffsetDateTime,
}

/// Answer joined with the answerer's name and the question it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerWithContext {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: OffsetDateTime,
    pub user_name: String,
    pub question_title: String,
}

impl Answer {
    pub async fn create(
        db: &PgPool,
        question_id: Uuid,
        user_id: Uuid,
        body: &str,
    ) -> anyhow::Result<Answer> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (question_id, user_id, body)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, user_id, body, created_at
            "#,
        )
        .bind(question_id)
        .bind(user_id)
        .bind(body)
        .fetch_one(db)
        .await?;
        Ok(answer)
    }

    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<AnswerWithContext>> {
        let rows = sqlx::query_as::<_, AnswerWithContext>(
            r#"
            SELECT a.id, a.question_id, a.user_id, a.body, a.created_at,
                   u.username AS user_name,
                   q.title AS question_title
            FROM answers a
            JOIN users u ON u.id = a.user_id
            JOIN questions q ON q.id = a.question_id
            ORDER BY a.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Answer>> {
        let row = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, user_id, body, created_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Owner id only, for the authorize step of edit/delete.
    pub async fn owner_of(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Uuid>> {
        let row: Option<(Uuid,)> = sqlx::query_as("SELECT user_id FROM answers WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row.map(|(user_id,)| user_id))
    }

    pub async fn update_body(db: &PgPool, id: Uuid, body: &str) -> anyhow::Result<()> {
        sqlx::query("UPDATE answers SET body = $2 WHERE id = $1")
            .bind(id)
            .bind(body)
            .execute(db)
            .await?;
        Ok(())
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
