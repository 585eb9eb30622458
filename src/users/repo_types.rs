use sqlx::FromRow;
use time::OffsetDateTime;

/// User record as read back from the database. The password digest is never selected.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: OffsetDateTime, // set by the database
}

/// Row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String, // Argon2 PHC string
}
