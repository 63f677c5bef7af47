use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/meals/{id}",
    tag = "meals",
    operation_id = "get_meal",
    params(("id" = String, Path, description = "Meal id")),
    responses(
        (status = 200, description = "Meal", body = crate::modules::meal::repository::MealWithRestaurant),
        (status = 404, description = "Meal not found", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id }).await
}
