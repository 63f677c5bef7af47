use super::types::{request, response};
use crate::{
    modules::{
        auth::service,
        restaurant,
        user::{
            self,
            repository::{Role, UserProfile},
        },
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let password = service::password::hash(payload.password).await.map_err(|err| {
        tracing::error!("Failed to hash password: {}", err);
        response::Error::UnexpectedError
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    // a taken email surfaces as a unique violation from the insert
    let user = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            email: payload.email,
            password,
            first_name: payload.first_name,
            last_name: payload.last_name,
            role: Role::RestaurantOwner,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::UnexpectedError,
    })?;

    // the user row is rolled back with the transaction if this fails
    let restaurant = restaurant::repository::create(
        &mut *tx,
        restaurant::repository::CreateRestaurantPayload {
            name: payload.restaurant_name,
            description: payload.restaurant_description,
            address: payload.restaurant_address,
            phone: payload.restaurant_phone,
            cuisine: payload.restaurant_cuisine,
            owner_id: user.id.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let access_token = service::auth::create_access_token(ctx.clone(), &user)
        .map_err(|_| response::Error::UnexpectedError)?;

    tracing::info!(
        "Registered restaurant owner {} with restaurant {}",
        user.id,
        restaurant.id
    );

    Ok(response::Success::Registered {
        access_token,
        user: UserProfile::new(user, Some(restaurant)),
    })
}
