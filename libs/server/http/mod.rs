use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::services::{activity::ActivityService, uploads::UploadStore};

pub mod error;
pub mod handlers;

/// Multipart bodies above this size are rejected outright.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub activity_service: ActivityService,
    pub upload_store: UploadStore,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/activities/{menteeId}", get(handlers::list_activities_handler))
        .route("/activities", post(handlers::create_activity_handler))
        .route("/uploads/{file}", get(handlers::serve_upload_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
