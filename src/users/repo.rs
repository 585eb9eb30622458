use async_trait::async_trait;
use sqlx::MySqlPool;
use thiserror::Error;

use crate::users::repo_types::{NewUser, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("generated id {0} does not fit in a signed 64-bit integer")]
    IdOutOfRange(u64),
}

/// Gateway to the `users` table. Implementations own their connection handle.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts one row and returns the id the database assigned to it.
    async fn insert_user(&self, user: &NewUser) -> Result<i64, StoreError>;
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn insert_user(&self, user: &NewUser) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (code, name, email, phone_number, password)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.code)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        i64::try_from(id).map_err(|_| StoreError::IdOutOfRange(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, code, name, email, phone_number, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, code, name, email, phone_number, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
