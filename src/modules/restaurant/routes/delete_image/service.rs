use super::types::{request, response};
use crate::{
    modules::{restaurant::repository, storage},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteImage)?
        .ok_or(response::Error::RestaurantNotFound)?;

    if restaurant.profile_image.is_some() {
        repository::set_profile_image(&ctx.db_conn.pool, restaurant.id, None)
            .await
            .map_err(|_| response::Error::FailedToDeleteImage)?;

        storage::discard(ctx.storage.clone(), restaurant.profile_image).await;
    }

    Ok(response::Success::ImageDeleted)
}
