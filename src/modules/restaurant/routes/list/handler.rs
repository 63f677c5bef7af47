use super::service::service;
use crate::types::Context;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/restaurants",
    tag = "restaurants",
    operation_id = "list_restaurants",
    responses(
        (status = 200, description = "All restaurants, newest first", body = [crate::modules::restaurant::repository::RestaurantWithOwner]),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx).await
}
