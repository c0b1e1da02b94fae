use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use rand_core::OsRng;

use crate::{
    error::{AppError, Result},
    models::User,
    store::{Id, Store},
};

/// Users keyed by id. Email and login are not required to be unique.
#[derive(Clone, Default)]
pub struct UserService {
    store: Store<User>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, email: String, login: String, password: String) -> Result<User> {
        let password_hash = hash_password(password).await?;
        let now = Utc::now();

        let user = self
            .store
            .insert_with(|id| User {
                id,
                email,
                login,
                password_hash,
                created_at: now,
                updated_at: now,
            })
            .await;

        tracing::info!(user_id = user.id, "created user");
        Ok(user)
    }

    pub async fn list(&self) -> Vec<User> {
        self.store.list().await
    }

    pub async fn get(&self, id: Id) -> Result<User> {
        self.store.get(id).await.ok_or(AppError::UserNotFound)
    }

    /// Replace email, login and password; `created_at` is left alone.
    pub async fn update(
        &self,
        id: Id,
        email: String,
        login: String,
        password: String,
    ) -> Result<User> {
        // Checked up front so a miss never pays for a hash.
        if self.store.get(id).await.is_none() {
            tracing::debug!(user_id = id, "update of unknown user");
            return Err(AppError::UserNotFound);
        }
        let password_hash = hash_password(password).await?;

        let user = self
            .store
            .update(id, |user| {
                user.email = email;
                user.login = login;
                user.password_hash = password_hash;
                user.touch();
            })
            .await
            .ok_or(AppError::UserNotFound)?;

        tracing::info!(user_id = id, "updated user");
        Ok(user)
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.store
            .remove(id)
            .await
            .ok_or(AppError::UserNotFound)?;

        tracing::info!(user_id = id, "deleted user");
        Ok(())
    }
}

/// Argon2 is CPU-bound, so it runs on the blocking pool.
async fn hash_password(password: String) -> Result<String> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await??;
    Ok(hash)
}
