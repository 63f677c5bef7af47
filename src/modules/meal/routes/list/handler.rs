use super::{service::service, types::request};
use crate::{modules::meal::filters::Filters, types::Context, utils::pagination::Pagination};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/meals",
    tag = "meals",
    operation_id = "list_meals",
    params(Filters, Pagination),
    responses(
        (status = 200, description = "Page of meals", body = crate::modules::docs::MealPage),
        (status = 400, description = "Invalid query parameters", body = crate::modules::docs::ErrorResponse),
        (status = 500, description = "Unexpected failure", body = crate::modules::docs::ErrorResponse),
    )
)]
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Query(filters): Query<Filters>,
    pagination: Pagination,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            pagination,
            filters,
        },
    )
    .await
}
