use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, Redirect},
    Form,
};

use crate::{error::Result, html, models::PostPayload, store::Id, AppState};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(html::index_page(&state.posts.list().await))
}

pub async fn view_post(State(state): State<AppState>, Path(id): Path<Id>) -> Result<Html<String>> {
    let post = state.posts.get(id).await?;
    Ok(Html(html::post_page(&post)))
}

pub async fn create_post_form() -> Html<String> {
    Html(html::create_post_page())
}

pub async fn create_post_action(
    State(state): State<AppState>,
    Form(form): Form<PostPayload>,
) -> Html<String> {
    state.posts.create(form.title, form.content).await;
    Html(html::post_created_page())
}

/// The post is looked up before the form is inspected, so an unknown id is a
/// 404 even when the body is incomplete. `Redirect::to` answers with
/// `303 See Other`, so the browser follows up with a GET of the post page.
pub async fn edit_post_action(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    form: std::result::Result<Form<PostPayload>, FormRejection>,
) -> Result<Redirect> {
    state.posts.get(id).await?;
    let Form(form) = form?;

    state.posts.update(id, form.title, form.content).await?;
    Ok(Redirect::to(&format!("/post/{id}")))
}
