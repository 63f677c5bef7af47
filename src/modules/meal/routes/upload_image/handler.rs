use super::{service::service, types::request};
use crate::{modules::auth::middleware::RestaurantOwnerAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use axum_typed_multipart::TypedMultipart;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/meals/{id}/upload-image",
    tag = "meals",
    operation_id = "upload_meal_image",
    params(("id" = String, Path, description = "Meal id")),
    request_body(content = crate::modules::docs::ImageUpload, content_type = "multipart/form-data"),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Image stored", body = crate::modules::docs::ImageUploaded),
        (status = 400, description = "Missing or invalid image", body = crate::modules::docs::ErrorResponse),
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
    TypedMultipart(body): TypedMultipart<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, auth, body }).await
}
