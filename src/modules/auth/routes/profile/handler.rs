use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "auth",
    operation_id = "get_profile",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = crate::modules::user::repository::UserProfile),
        (status = 401, description = "Missing or invalid token", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(State(ctx): State<Arc<Context>>, auth: Auth) -> impl IntoResponse {
    service(ctx, request::Payload { auth }).await
}
