use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Id;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub email: String,
    pub login: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Bump `updated_at` to now. A wall clock that stepped backwards never
    /// moves it below its previous value, so it stays `>= created_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// Body of `POST /users/` and `PUT /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub email: String,
    pub login: String,
    pub password: String,
}
