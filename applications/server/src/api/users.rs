/// User API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use roster_core::types::{CreateUser, User, UserId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub id: String,
}

impl UserIdQuery {
    fn parse(&self) -> Result<UserId> {
        self.id
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid user id: {}", self.id)))
    }
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

/// GET /users/find?id=N
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<User>> {
    let id = query.parse()?;
    let user = state.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// POST /users/create
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUser>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(req) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    state.users.create(req).await?;
    Ok(StatusCode::CREATED)
}

/// POST /users/update
pub async fn update_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<User>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(user) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    state.users.update(&user).await?;
    Ok(StatusCode::OK)
}

/// POST /users/delete?id=N
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<StatusCode> {
    let id = query.parse()?;
    state.users.delete(id).await?;
    Ok(StatusCode::OK)
}
