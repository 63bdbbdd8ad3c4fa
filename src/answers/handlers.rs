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
    questions::repo::Question,
    state::AppState,
};

use super::dto::{AnswerItem, EditAnswerRequest, PostAnswerRequest, SingleAnswer};
use super::repo::{Answer, AnswerWithContext};

fn to_item(a: AnswerWithContext) -> AnswerItem {
    AnswerItem {
        id: a.id,
        question_id: a.question_id,
        user_id: a.user_id,
        answer: a.body,
        user_name: a.user_name,
        question_title: a.question_title,
        created_at: a.created_at,
    }
}

#[instrument(skip(state, payload))]
pub async fn post_answer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(question_id): Path<Uuid>,
    Json(payload): Json<PostAnswerRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiError> {
    let body = payload.answer.trim();
    if body.is_empty() {
        return Err(ApiError::bad_request("Please provide an answer"));
    }

    // Answers may only attach to an existing question
    if Question::owner_of(&state.db, question_id).await?.is_none() {
        return Err(ApiError::not_found("Question not found"));
    }

    let answer = Answer::create(&state.db, question_id, user.user_id, body).await?;

    info!(answer_id = %answer.id, question_id = %question_id, user_id = %user.user_id, "answer posted");
    Ok((
        StatusCode::CREATED,
        Json(MsgResponse {
            msg: "Answer posted successfully".into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_answers(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<AnswerItem>>, ApiError> {
    let rows = Answer::list_all(&state.db).await?;
    Ok(Json(rows.into_iter().map(to_item).collect()))
}

#[instrument(skip(state))]
pub async fn get_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SingleAnswer>, ApiError> {
    let a = Answer::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Answer not found"))?;
    Ok(Json(SingleAnswer {
        id: a.id,
        question_id: a.question_id,
        user_id: a.user_id,
        answer: a.body,
        created_at: a.created_at,
    }))
}

#[instrument(skip(state, payload))]
pub async fn edit_answer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditAnswerRequest>,
) -> Result<Json<MsgResponse>, ApiError> {
    let body = payload.answer.trim();
    if body.is_empty() {
        return Err(ApiError::bad_request("Please provide an answer content"));
    }

    let owner = Answer::owner_of(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Answer not found"))?;
    authorize_owner(owner, user.user_id, "edit")?;

    Answer::update_body(&state.db, id, body).await?;

    info!(answer_id = %id, user_id = %user.user_id, "answer updated");
    Ok(Json(MsgResponse {
        msg: "Answer updated successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_answer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MsgResponse>, ApiError> {
    let owner = Answer::owner_of(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Answer not found"))?;
    authorize_owner(owner, user.user_id, "delete")?;

    Answer::delete(&state.db, id).await?;

    info!(answer_id = %id, user_id = %user.user_id, "answer deleted");
    Ok(Json(MsgResponse {
        msg: "Answer deleted successfully".into(),
    }))
}
