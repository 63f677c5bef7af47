use super::service;
use crate::modules::user::repository::{Role, User};
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde_json::json;
use std::sync::Arc;

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}

async fn get_user_from_request(ctx: Arc<Context>, parts: &mut Parts) -> Result<User, Response> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| unauthorized("Missing bearer token"))?;

    service::auth::authenticate(ctx, bearer.token())
        .await
        .map_err(|err| match err {
            service::auth::Error::UnexpectedError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Sorry an error occurred" })),
            )
                .into_response(),
            service::auth::Error::ExpiredToken => unauthorized("Token has expired"),
            _ => unauthorized("Invalid access token"),
        })
}

#[derive(Clone)]
pub struct Auth {
    pub user: User,
}

#[async_trait]
impl FromRequestParts<Arc<Context>> for Auth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        get_user_from_request(ctx.clone(), parts)
            .await
            .map(|user| Self { user })
    }
}

/// Authenticated user holding the `restaurant_owner` role.
#[derive(Clone)]
pub struct RestaurantOwnerAuth {
    pub user: User,
}

#[async_trait]
impl FromRequestParts<Arc<Context>> for RestaurantOwnerAuth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        let user = get_user_from_request(ctx.clone(), parts).await?;

        service::auth::authorize(&user, Role::RestaurantOwner).map_err(|_| {
            tracing::warn!("User {} is not a restaurant owner", user.id);
            (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": "Only restaurant owners can perform this action" })),
            )
                .into_response()
        })?;

        Ok(Self { user })
    }
}
