use super::repository::{self, Price, SortBy, SortOrder};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Query parameters accepted by the meal listing endpoints.
#[derive(Deserialize, Validate, Clone, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct Filters {
    /// Case-insensitive match against name or description.
    pub search: Option<String>,
    pub restaurant_id: Option<String>,
    pub is_available: Option<bool>,
    #[validate(range(min = 0.0, message = "Minimum price must be at least 0"))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0, message = "Maximum price must be at least 0"))]
    pub max_price: Option<f64>,
    #[serde(default)]
    #[param(inline)]
    pub sort_by: SortBy,
    #[serde(default)]
    #[param(inline)]
    pub sort_order: SortOrder,
}

impl From<Filters> for repository::Filters {
    fn from(filters: Filters) -> Self {
        Self {
            search: filters.search,
            restaurant_id: filters.restaurant_id,
            is_available: filters.is_available,
            min_price: filters.min_price.map(Price::at_least),
            max_price: filters.max_price.map(Price::at_most),
            sort_by: filters.sort_by,
            sort_order: filters.sort_order,
        }
    }
}
