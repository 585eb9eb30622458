use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::users::repo_types::User;

/// Request body for user creation. Missing or `null` fields bind as empty strings;
/// `id`, `code` and `created_at` are ignored if a client sends them.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response returned after a user is created.
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Public view of a stored user.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            code: u.code,
            name: u.name,
            email: u.email,
            phone_number: u.phone_number,
            created_at: u.created_at,
        }
    }
}
