use super::types::{request, response};
use crate::{
    modules::{
        auth::service,
        restaurant,
        user::{self, repository::UserProfile},
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

    let user = user::repository::find_by_email(&ctx.db_conn.pool, payload.email)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::InvalidCredentials)?;

    let matches = service::password::verify(payload.password, user.password.clone())
        .await
        .map_err(|err| {
            tracing::error!("Failed to verify password of user {}: {}", user.id, err);
            response::Error::UnexpectedError
        })?;

    if !matches {
        return Err(response::Error::InvalidCredentials);
    }

    let restaurant = restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, user.id.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    let access_token = service::auth::create_access_token(ctx.clone(), &user)
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::LoggedIn {
        access_token,
        user: UserProfile::new(user, restaurant),
    })
}
