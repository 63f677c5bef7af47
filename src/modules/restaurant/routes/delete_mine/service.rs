use super::types::{request, response};
use crate::{
    modules::{meal, restaurant::repository, storage},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let meal_images =
        meal::repository::find_images_by_restaurant_id(&ctx.db_conn.pool, restaurant.id.clone())
            .await
            .map_err(|_| response::Error::FailedToDeleteRestaurant)?;

    // meals go with the restaurant through the foreign key cascade
    repository::delete_by_id(&ctx.db_conn.pool, restaurant.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteRestaurant)?;

    storage::discard(ctx.storage.clone(), restaurant.profile_image).await;
    for image in meal_images {
        storage::discard(ctx.storage.clone(), Some(image)).await;
    }

    tracing::info!("Deleted restaurant {}", restaurant.id);

    Ok(response::Success::RestaurantDeleted)
}
