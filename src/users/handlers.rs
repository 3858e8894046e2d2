use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use super::{
    dto::{AuthOutput, DeleteUserInput, DeleteUserRequest, LoginInput, MessageOutput, SignupInput},
    extractors::SessionToken,
};
use crate::{error::AppError, state::AppState};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(signup))
        .route("/users/login", post(login))
        .route("/users/:id", delete(delete_user))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthOutput>), AppError> {
    let Json(payload) = payload?;
    let out = state.accounts.signup(payload).await?;
    Ok((StatusCode::CREATED, Json(out)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<AuthOutput>, AppError> {
    let Json(payload) = payload?;
    Ok(Json(state.accounts.login(payload).await?))
}

#[instrument(skip(state, token))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    SessionToken(token): SessionToken,
) -> Result<Json<MessageOutput>, AppError> {
    let input = DeleteUserInput::parse(&DeleteUserRequest {
        id_to_delete: Value::String(id),
        token: token.map(Value::String).unwrap_or(Value::Null),
    })?;
    Ok(Json(state.accounts.delete_user(input).await?))
}
