use chrono::Utc;

use crate::{
    error::{AppError, Result},
    models::{Post, DEFAULT_AUTHOR_ID},
    store::{Id, Store},
};

/// Posts keyed by id. The author id is fixed and never checked against the
/// user store.
#[derive(Clone, Default)]
pub struct PostService {
    store: Store<Post>,
}

impl PostService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, title: String, content: String) -> Post {
        let now = Utc::now();

        let post = self
            .store
            .insert_with(|id| Post {
                id,
                author_id: DEFAULT_AUTHOR_ID,
                title,
                content,
                created_at: now,
                updated_at: now,
            })
            .await;

        tracing::info!(post_id = post.id, "created post");
        post
    }

    pub async fn list(&self) -> Vec<Post> {
        self.store.list().await
    }

    pub async fn get(&self, id: Id) -> Result<Post> {
        self.store.get(id).await.ok_or(AppError::PostNotFound)
    }

    pub async fn update(&self, id: Id, title: String, content: String) -> Result<Post> {
        let post = self
            .store
            .update(id, |post| {
                post.title = title;
                post.content = content;
                post.touch();
            })
            .await
            .ok_or_else(|| {
                tracing::debug!(post_id = id, "update of unknown post");
                AppError::PostNotFound
            })?;

        tracing::info!(post_id = id, "updated post");
        Ok(post)
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.store
            .remove(id)
            .await
            .ok_or(AppError::PostNotFound)?;

        tracing::info!(post_id = id, "deleted post");
        Ok(())
    }
}
