pub mod request {
    use crate::{
        modules::{auth::middleware::RestaurantOwnerAuth, meal::filters::Filters},
        utils::pagination::Pagination,
    };

    pub struct Payload {
        pub auth: RestaurantOwnerAuth,
        pub filters: Filters,
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{
        modules::meal::repository::MealWithRestaurant,
        utils::{pagination::Paginated, validation},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Meals(Paginated<MealWithRestaurant>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Meals(meals) => (StatusCode::OK, Json(json!(meals))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        FailedToFetchMeals,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found for this user" })),
                )
                    .into_response(),
                Self::FailedToFetchMeals => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch meals" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
