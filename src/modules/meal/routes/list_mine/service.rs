use super::types::{request, response};
use crate::{
    modules::{meal::repository, restaurant},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.filters.validate().map_err(|errors| {
        tracing::warn!("Invalid meal filters: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant =
        restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
            .await
            .map_err(|_| response::Error::FailedToFetchMeals)?
            .ok_or(response::Error::RestaurantNotFound)?;

    repository::find_many(
        &ctx.db_conn.pool,
        payload.pagination,
        repository::Filters {
            restaurant_id: Some(restaurant.id),
            ..repository::Filters::from(payload.filters)
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMeals)
    .map(response::Success::Meals)
}
