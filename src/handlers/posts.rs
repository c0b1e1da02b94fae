use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::Result,
    models::{Post, PostPayload},
    store::Id,
    AppState,
};

pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Json<Post> {
    Json(state.posts.create(payload.title, payload.content).await)
}

pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list().await)
}

pub async fn get_post(State(state): State<AppState>, Path(id): Path<Id>) -> Result<Json<Post>> {
    Ok(Json(state.posts.get(id).await?))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>> {
    let post = state
        .posts
        .update(id, payload.title, payload.content)
        .await?;
    Ok(Json(post))
}

pub async fn delete_post(State(state): State<AppState>, Path(id): Path<Id>) -> Result<Json<Value>> {
    state.posts.delete(id).await?;
    Ok(Json(json!({ "detail": "Post deleted" })))
}
