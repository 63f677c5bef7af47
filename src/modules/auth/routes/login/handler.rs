use super::{service::service, types::request};
use crate::{types::Context, utils::validation::JsonBody};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    operation_id = "login",
    request_body(content = inline(request::Payload), content_type = "application/json"),
    responses(
        (status = 200, description = "Logged in", body = crate::modules::docs::AuthResponse),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Invalid credentials", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    JsonBody(payload): JsonBody<request::Payload>,
) -> impl IntoResponse {
    service(ctx, payload).await
}
