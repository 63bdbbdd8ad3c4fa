use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{dto::MsgResponse, extractors::AuthUser},
    error::ApiError,
    ownership::authorize_owner,
    state::AppState,
};

use super::dto::{
    CreateQuestionRequest, CreatedQuestionResponse, QuestionItem, UpdateQuestionRequest,
};
use super::repo::{Question, QuestionWithUser};

fn to_item(q: QuestionWithUser) -> QuestionItem {
    QuestionItem {
        id: q.id,
        user_id: q.user_id,
        title: q.title,
        description: q.description,
        tag: q.tag,
        user_name: q.user_name,
        created_at: q.created_at,
    }
}

#[instrument(skip(state, payload))]
pub async fn create_question(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<CreatedQuestionResponse>), ApiError> {
    let title = payload.title.trim();
    let description = payload.description.trim();
    if title.is_empty() || description.is_empty() {
        return Err(ApiError::bad_request(
            "Please provide a title and description",
        ));
    }
    let tag = payload
        .tag
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("general");

    let question = Question::create(&state.db, user.user_id, title, description, tag).await?;

    info!(question_id = %question.id, user_id = %user.user_id, "question posted");
    Ok((
        StatusCode::CREATED,
        Json(CreatedQuestionResponse {
            msg: "Question posted successfully".into(),
            question_id: question.id,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionItem>>, ApiError> {
    let rows = Question::list_all(&state.db).await?;
    Ok(Json(rows.into_iter().map(to_item).collect()))
}

#[instrument(skip(state))]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionItem>, ApiError> {
    let question = Question::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Question not found"))?;
    Ok(Json(to_item(question)))
}

#[instrument(skip(state, payload))]
pub async fn update_question(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<Json<MsgResponse>, ApiError> {
    let title = payload.title.trim();
    let description = payload.description.trim();
    if title.is_empty() || description.is_empty() {
        return Err(ApiError::bad_request(
            "Please provide a title and description",
        ));
    }
    let tag = payload
        .tag
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("general");

    // Read-then-authorize-then-write; not transactional, last write wins
    let owner = Question::owner_of(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Question not found"))?;
    authorize_owner(owner, user.user_id, "edit")?;

    Question::update(&state.db, id, title, description, tag).await?;

    info!(question_id = %id, user_id = %user.user_id, "question updated");
    Ok(Json(MsgResponse {
        msg: "Question updated successfully".into(),
    }))
}
