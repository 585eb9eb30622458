use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        code::generate_code,
        dto::{CreateUserRequest, CreatedUserResponse, PublicUser},
        password::hash_password,
        repo_types::NewUser,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
}

/// The body is parsed whatever its content type; only its JSON shape matters.
#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    let payload: CreateUserRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let password_hash = hash_password(payload.password.as_deref().unwrap_or_default())?;

    let new_user = NewUser {
        code: generate_code(),
        name: payload.name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        phone_number: payload.phone_number.unwrap_or_default(),
        password_hash,
    };

    let id = state.users.insert_user(&new_user).await?;

    info!(user_id = id, code = %new_user.code, "user created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            id,
            code: new_user.code,
            name: new_user.name,
            email: new_user.email,
            phone_number: new_user.phone_number,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PublicUser>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state
        .users
        .find_user(id)
        .await?
        .map(|u| Json(PublicUser::from(u)))
        .ok_or_else(|| ApiError::NotFound("User not found".into()))
}
