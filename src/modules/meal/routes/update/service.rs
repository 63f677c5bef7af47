use super::types::{request, response};
use crate::{
    modules::{
        meal::repository::{self, Price},
        restaurant,
    },
    types::Context,
    utils::validation,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let price = payload
        .body
        .price
        .map(|price| {
            Price::from_amount(price).ok_or_else(|| {
                response::Error::FailedToValidate(validation::field_error(
                    "price",
                    "INVALID_PRICE",
                    "Price must be a valid number with up to 2 decimal places",
                ))
            })
        })
        .transpose()?;

    let restaurant =
        restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
            .await
            .map_err(|_| response::Error::FailedToUpdateMeal)?
            .ok_or(response::Error::RestaurantNotFound)?;

    let meal =
        repository::find_by_id_and_restaurant_id(&ctx.db_conn.pool, payload.id, restaurant.id)
            .await
            .map_err(|_| response::Error::FailedToUpdateMeal)?
            .ok_or(response::Error::MealNotFound)?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        &meal,
        repository::UpdateMealPayload {
            name: payload.body.name,
            description: payload.body.description,
            price,
            is_available: payload.body.is_available,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateMeal)
    .map(response::Success::MealUpdated)
}
