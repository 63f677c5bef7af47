use super::types::{request, response};
use crate::{
    modules::{meal::repository, restaurant, storage},
    types::Context,
};
use std::sync::Arc;

fn storage_error(err: storage::Error) -> response::Error {
    if err.is_rejection() {
        tracing::warn!("Rejected meal image: {}", err.message());
        return response::Error::InvalidFile(err.message());
    }

    response::Error::FailedToUploadImage
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant =
        restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
            .await
            .map_err(|_| response::Error::FailedToUploadImage)?
            .ok_or(response::Error::RestaurantNotFound)?;

    let meal =
        repository::find_by_id_and_restaurant_id(&ctx.db_conn.pool, payload.id, restaurant.id)
            .await
            .map_err(|_| response::Error::FailedToUploadImage)?
            .ok_or(response::Error::MealNotFound)?;

    let file = storage::File::from_field(payload.body.file)
        .await
        .map_err(storage_error)?;
    let file_name = storage::save(ctx.storage.clone(), file)
        .await
        .map_err(storage_error)?;

    if repository::set_image_by_id(&ctx.db_conn.pool, meal.id, Some(file_name.clone()))
        .await
        .is_err()
    {
        storage::discard(ctx.storage.clone(), Some(file_name)).await;
        return Err(response::Error::FailedToUploadImage);
    }

    storage::discard(ctx.storage.clone(), meal.image).await;

    Ok(response::Success::ImageUploaded {
        image_url: storage::url_for(&ctx.storage, &file_name),
        file_name,
    })
}
