/// API route modules
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Assemble the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/users", get(users::list_users))
        .route("/users/find", get(users::get_user))
        .route("/users/create", post(users::create_user))
        .route("/users/update", post(users::update_user))
        .route("/users/delete", post(users::delete_user))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
