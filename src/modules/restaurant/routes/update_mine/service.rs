use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant = repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        restaurant.id,
        repository::UpdateRestaurantPayload {
            name: payload.body.name,
            description: payload.body.description,
            address: payload.body.address,
            phone: payload.body.phone,
            cuisine: payload.body.cuisine,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateRestaurant)
    .map(response::Success::RestaurantUpdated)
}
