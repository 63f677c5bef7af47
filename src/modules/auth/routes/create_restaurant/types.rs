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
        pub name: String,
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
        pub address: String,
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
        RestaurantCreated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantCreated(restaurant) => {
                    (StatusCode::CREATED, Json(json!(restaurant))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        AlreadyCreatedRestaurant,
        FailedToCreateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::AlreadyCreatedRestaurant => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User already has a restaurant" })),
                )
                    .into_response(),
                Self::FailedToCreateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
