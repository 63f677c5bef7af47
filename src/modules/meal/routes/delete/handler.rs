use super::{service::service, types::request};
use crate::{modules::auth::middleware::RestaurantOwnerAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/meals/{id}",
    tag = "meals",
    operation_id = "delete_meal",
    params(("id" = String, Path, description = "Meal id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Meal deleted", body = crate::modules::docs::MessageResponse),
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
) -> impl IntoResponse {
    service(ctx, request::Payload { id, auth }).await
}
