use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Id;

/// Every post is attributed to this author; there are no sessions to derive
/// it from.
pub const DEFAULT_AUTHOR_ID: Id = 1;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    pub author_id: Id,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Bump `updated_at` to now. A wall clock that stepped backwards never
    /// moves it below its previous value, so it stays `>= created_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// JSON body for `/posts/` and the urlencoded body of the HTML forms.
#[derive(Debug, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
}
