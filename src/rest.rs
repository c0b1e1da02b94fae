use axum::{
    http::Uri,
    response::Redirect,
    routing::{any, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{pages, posts, users},
    AppState,
};

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", any(redirect_to_slash))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/posts", any(redirect_to_slash))
        .route("/posts/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        );

    let html = Router::new()
        .route("/", get(pages::index))
        .route("/post/:id", get(pages::view_post))
        .route(
            "/create-post",
            get(pages::create_post_form).post(pages::create_post_action),
        )
        .route("/edit-post/:id", post(pages::edit_post_action));

    api.merge(html)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Collection routes live under a trailing slash; the bare path answers with
/// `307 Temporary Redirect` so the method and body survive the hop.
async fn redirect_to_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::temporary(&target)
}
