pub mod request {
    use crate::modules::auth::middleware::RestaurantOwnerAuth;
    use serde::Deserialize;
    use utoipa::ToSchema;
    use validator::Validate;

    #[derive(Deserialize, Validate, ToSchema)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    pub struct Body {
        #[validate(length(
            min = 2,
            max = 100,
            message = "Meal name must be between 2 and 100 characters"
        ))]
        pub name: String,
        #[validate(length(
            min = 10,
            max = 500,
            message = "Description must be between 10 and 500 characters"
        ))]
        pub description: String,
        #[validate(range(
            min = 0.01,
            max = 999.99,
            message = "Price must be between $0.01 and $999.99"
        ))]
        #[schema(example = 15.99)]
        pub price: f64,
        pub is_available: Option<bool>,
    }

    pub struct Payload {
        pub auth: RestaurantOwnerAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::meal::repository::Meal, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MealCreated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealCreated(meal) => (StatusCode::CREATED, Json(json!(meal))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        FailedToCreateMeal,
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
                Self::FailedToCreateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
