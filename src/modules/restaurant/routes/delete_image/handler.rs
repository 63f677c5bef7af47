use super::{service::service, types::request};
use crate::{modules::auth::middleware::RestaurantOwnerAuth, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/restaurants/my/restaurant/image",
    tag = "restaurants",
    operation_id = "delete_restaurant_image",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Image removed", body = crate::modules::docs::MessageResponse),
        (status = 401, description = "Missing or invalid token", body = crate::modules::docs::ErrorResponse),
        (status = 403, description = "Not a restaurant owner", body = crate::modules::docs::ErrorResponse),
        (status = 404, description = "Restaurant not found", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: RestaurantOwnerAuth,
) -> impl IntoResponse {
    service(ctx, request::Payload { auth }).await
}
