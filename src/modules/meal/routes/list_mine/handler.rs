use super::{service::service, types::request};
use crate::{
    modules::{auth::middleware::RestaurantOwnerAuth, meal::filters::Filters},
    types::Context,
    utils::pagination::Pagination,
};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/meals/my/meals",
    tag = "meals",
    operation_id = "list_own_meals",
    params(Filters, Pagination),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Page of the caller's meals", body = crate::modules::docs::MealPage),
        (status = 400, description = "Invalid query parameters", body = crate::modules::docs::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::modules::docs::ErrorResponse),
        (status = 403, description = "Not a restaurant owner", body = crate::modules::docs::ErrorResponse),
        (status = 404, description = "Restaurant not found", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: RestaurantOwnerAuth,
    Query(filters): Query<Filters>,
    pagination: Pagination,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            auth,
            pagination,
            filters,
        },
    )
    .await
}
