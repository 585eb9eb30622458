#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use time::OffsetDateTime;
use tower::ServiceExt; // For oneshot()
use users_api::{
    app::build_app,
    state::AppState,
    users::{NewUser, StoreError, User, UserStore},
};

#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

/// Keeps rows in memory and hands out sequential ids starting at 1.
#[derive(Default)]
pub struct InMemoryUserStore {
    rows: Mutex<Vec<StoredUser>>,
}

impl InMemoryUserStore {
    pub fn rows(&self) -> Vec<StoredUser> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_user(&self, user: &NewUser) -> Result<i64, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(StoredUser {
            user: User {
                id,
                code: user.code.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
                phone_number: user.phone_number.clone(),
                created_at: OffsetDateTime::now_utc(),
            },
            password_hash: user.password_hash.clone(),
        });
        Ok(id)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.rows.lock().unwrap().iter().map(|r| r.user.clone()).collect())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user.id == id)
            .map(|r| r.user.clone()))
    }
}

/// Fails every call the way an unreachable database would.
pub struct UnavailableUserStore;

#[async_trait]
impl UserStore for UnavailableUserStore {
    async fn insert_user(&self, _user: &NewUser) -> Result<i64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_user(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn app_with(store: Arc<dyn UserStore>) -> Router {
    build_app(AppState::from_store(store))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// Helper to parse JSON response body
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
