pub mod post;
pub mod user;

pub use post::{Post, PostPayload, DEFAULT_AUTHOR_ID};
pub use user::{User, UserPayload};
