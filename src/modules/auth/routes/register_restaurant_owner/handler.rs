use super::{service::service, types::request};
use crate::{types::Context, utils::validation::JsonBody};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/auth/register/restaurant-owner",
    tag = "auth",
    operation_id = "register_restaurant_owner",
    request_body(content = inline(request::Payload), content_type = "application/json"),
    responses(
        (status = 201, description = "Owner and restaurant registered", body = crate::modules::docs::AuthResponse),
        (status = 400, description = "Invalid request body"),
        (status = 409, description = "Email already registered", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    JsonBody(payload): JsonBody<request::Payload>,
) -> impl IntoResponse {
    service(ctx, payload).await
}
