use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::Result,
    models::{User, UserPayload},
    store::Id,
    AppState,
};

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>> {
    let user = state
        .users
        .create(payload.email, payload.login, payload.password)
        .await?;
    Ok(Json(user))
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

pub async fn get_user(State(state): State<AppState>, Path(id): Path<Id>) -> Result<Json<User>> {
    Ok(Json(state.users.get(id).await?))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>> {
    let user = state
        .users
        .update(id, payload.email, payload.login, payload.password)
        .await?;
    Ok(Json(user))
}

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<Id>) -> Result<Json<Value>> {
    state.users.delete(id).await?;
    Ok(Json(json!({ "detail": "User deleted" })))
}
