use super::validation;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginatedMeta,
}

#[derive(Serialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedMeta {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginatedMeta {
    pub fn new(total: u32, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };

        Self {
            total,
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u32, page: u32, limit: u32) -> Paginated<T> {
        Self {
            data,
            meta: PaginatedMeta::new(total, page, limit),
        }
    }
}

#[derive(Deserialize, Validate, Clone, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: u32,
}

impl Pagination {
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pagination) = parts.extract::<Query<Pagination>>().await.map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid pagination options" })),
            )
                .into_response()
        })?;

        pagination.validate().map_err(|errors| {
            tracing::warn!("Invalid pagination options: {errors}");
            validation::into_response(errors).into_response()
        })?;

        Ok(pagination)
    }
}
