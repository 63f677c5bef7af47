use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::RestaurantOwnerAuth, types::Context, utils::validation::JsonBody,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    patch,
    path = "/api/meals/{id}",
    tag = "meals",
    operation_id = "update_meal",
    params(("id" = String, Path, description = "Meal id")),
    request_body(content = inline(request::Body), content_type = "application/json"),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Meal updated", body = crate::modules::meal::repository::Meal),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Missing or invalid token", body = crate::modules::docs::ErrorResponse),
        (status = 403, description = "Not a restaurant owner", body = crate::modules::docs::ErrorResponse),
        (status = 404, description = "Meal not found", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: RestaurantOwnerAuth,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body, auth }).await
}
