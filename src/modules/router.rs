use super::{auth, docs, meal, restaurant};
use crate::types::Context;
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, Router},
    Json,
};
use serde_json::json;
use std::sync::Arc;

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Restaurant API is running" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health))
        .nest("/auth", auth::routes::get_router())
        .nest("/restaurants", restaurant::routes::get_router())
        .nest("/meals", meal::routes::get_router())
        .merge(docs::get_router())
}
