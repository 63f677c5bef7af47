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
            message = "Restaurant name must be between 2 and 100 characters"
        ))]
        pub name: Option<String>,
        #[validate(length(
            min = 10,
            max = 500,
            message = "Description must be between 10 and 500 characters"
        ))]
        pub description: Option<String>,
        #[validate(length(
            min = 10,
            max = 200,
            message = "Address must be between 10 and 200 characters"
        ))]
        pub address: Option<String>,
        #[validate(length(
            min = 10,
            max = 20,
            message = "Phone number must be between 10 and 20 characters"
        ))]
        pub phone: Option<String>,
        #[validate(length(
            min = 2,
            max = 50,
            message = "Cuisine type must be between 2 and 50 characters"
        ))]
        pub cuisine: Option<String>,
    }

    pub struct Payload {
        pub auth: RestaurantOwnerAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        RestaurantUpdated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantUpdated(restaurant) => {
                    (StatusCode::OK, Json(json!(restaurant))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        FailedToUpdateRestaurant,
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
                Self::FailedToUpdateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
