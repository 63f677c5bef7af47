use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let owner_id = payload.auth.user.id;

    if repository::find_by_owner_id(&ctx.db_conn.pool, owner_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateRestaurant)?
        .is_some()
    {
        return Err(response::Error::AlreadyCreatedRestaurant);
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateRestaurantPayload {
            name: payload.body.name,
            description: payload.body.description,
            address: payload.body.address,
            phone: payload.body.phone,
            cuisine: payload.body.cuisine,
            owner_id,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::OwnerAlreadyHasRestaurant => response::Error::AlreadyCreatedRestaurant,
        repository::Error::UnexpectedError => response::Error::FailedToCreateRestaurant,
    })
    .map(response::Success::RestaurantCreated)
}
