use super::types::{request, response};
use crate::{
    modules::{
        auth::service,
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

    if user::repository::find_by_email(&ctx.db_conn.pool, payload.email.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password = service::password::hash(payload.password).await.map_err(|err| {
        tracing::error!("Failed to hash password: {}", err);
        response::Error::UnexpectedError
    })?;

    let user = user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            email: payload.email,
            password,
            first_name: payload.first_name,
            last_name: payload.last_name,
            role: Role::Customer,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::UnexpectedError,
    })?;

    let access_token = service::auth::create_access_token(ctx.clone(), &user)
        .map_err(|_| response::Error::UnexpectedError)?;

    tracing::info!("Registered customer {}", user.id);

    Ok(response::Success::Registered {
        access_token,
        user: UserProfile::new(user, None),
    })
}
