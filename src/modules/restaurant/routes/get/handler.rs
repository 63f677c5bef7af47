use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    tag = "restaurants",
    operation_id = "get_restaurant",
    params(("id" = String, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant", body = crate::modules::restaurant::repository::RestaurantWithOwner),
        (status = 404, description = "Restaurant not found", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id }).await
}
