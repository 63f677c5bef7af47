use super::types::{request, response};
use crate::{
    modules::{meal::repository, restaurant, storage},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant =
        restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
            .await
            .map_err(|_| response::Error::FailedToDeleteMeal)?
            .ok_or(response::Error::RestaurantNotFound)?;

    let meal =
        repository::find_by_id_and_restaurant_id(&ctx.db_conn.pool, payload.id, restaurant.id)
            .await
            .map_err(|_| response::Error::FailedToDeleteMeal)?
            .ok_or(response::Error::MealNotFound)?;

    repository::delete_by_id(&ctx.db_conn.pool, meal.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteMeal)?;

    storage::discard(ctx.storage.clone(), meal.image).await;

    Ok(response::Success::MealDeleted)
}
