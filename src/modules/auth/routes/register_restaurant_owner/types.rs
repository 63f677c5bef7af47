pub mod request {
    use serde::Deserialize;
    use utoipa::ToSchema;
    use validator::Validate;

    #[derive(Deserialize, Validate, ToSchema)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    pub struct Payload {
        #[validate(email(code = "INVALID_EMAIL", message = "Please provide a valid email address"))]
        pub email: String,
        #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
        pub password: String,
        #[validate(length(
            min = 2,
            max = 50,
            message = "First name must be between 2 and 50 characters"
        ))]
        pub first_name: String,
        #[validate(length(
            min = 2,
            max = 50,
            message = "Last name must be between 2 and 50 characters"
        ))]
        pub last_name: String,
        #[validate(length(
            min = 2,
            max = 100,
            message = "Restaurant name must be between 2 and 100 characters"
        ))]
        pub restaurant_name: String,
        #[validate(length(
            min = 10,
            max = 500,
            message = "Description must be between 10 and 500 characters"
        ))]
        pub restaurant_description: Option<String>,
        #[validate(length(
            min = 10,
            max = 200,
            message = "Address must be between 10 and 200 characters"
        ))]
        pub restaurant_address: String,
        #[validate(length(
            min = 10,
            max = 20,
            message = "Phone number must be between 10 and 20 characters"
        ))]
        pub restaurant_phone: Option<String>,
        #[validate(length(
            min = 2,
            max = 50,
            message = "Cuisine type must be between 2 and 50 characters"
        ))]
        pub restaurant_cuisine: Option<String>,
    }
}

pub mod response {
    use crate::{modules::user::repository::UserProfile, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Registered {
            access_token: String,
            user: UserProfile,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered { access_token, user } => (
                    StatusCode::CREATED,
                    Json(json!({ "accessToken": access_token, "user": user })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        FailedToCreateRestaurant,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User with this email already exists" })),
                )
                    .into_response(),
                Self::FailedToCreateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create restaurant" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
