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
