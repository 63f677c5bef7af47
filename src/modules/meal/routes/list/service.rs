use super::types::{request, response};
use crate::{modules::meal::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.filters.validate().map_err(|errors| {
        tracing::warn!("Invalid meal filters: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::find_many(
        &ctx.db_conn.pool,
        payload.pagination,
        repository::Filters::from(payload.filters),
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMeals)
    .map(response::Success::Meals)
}
