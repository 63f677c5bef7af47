use super::types::{request, response};
use crate::{
    modules::{restaurant, user::repository::UserProfile},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;

    let restaurant = restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?;

    Ok(response::Success::Profile(UserProfile::new(user, restaurant)))
}
