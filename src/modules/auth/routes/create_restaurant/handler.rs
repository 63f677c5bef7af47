use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::RestaurantOwnerAuth, types::Context, utils::validation::JsonBody,
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/auth/restaurant",
    tag = "auth",
    operation_id = "create_own_restaurant",
    request_body(content = inline(request::Body), content_type = "application/json"),
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Restaurant created", body = crate::modules::restaurant::repository::Restaurant),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Missing or invalid token", body = crate::modules::docs::ErrorResponse),
        (status = 403, description = "Not a restaurant owner", body = crate::modules::docs::ErrorResponse),
        (status = 409, description = "Owner already has a restaurant", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: RestaurantOwnerAuth,
    JsonBody(body): JsonBody<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { auth, body }).await
}
