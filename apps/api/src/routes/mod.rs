pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::resumes::{handlers, views};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages and form routes
        .route("/", get(views::handle_index))
        .route("/add_resume", post(views::handle_add_resume))
        .route("/delete_resume/:id", get(views::handle_delete_resume))
        // JSON API
        .route(
            "/api/resumes",
            get(handlers::handle_list_resumes).post(handlers::handle_create_resume),
        )
        .route(
            "/api/resumes/:id/update_name",
            patch(handlers::handle_update_name),
        )
        .with_state(state)
}
