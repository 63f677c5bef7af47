pub mod request {
    use serde::Deserialize;
    use utoipa::ToSchema;
    use validator::Validate;

    #[derive(Deserialize, Validate, ToSchema)]
    #[serde(deny_unknown_fields)]
    pub struct Payload {
        #[validate(email(code = "INVALID_EMAIL", message = "Please provide a valid email address"))]
        pub email: String,
        #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
        pub password: String,
    }
}

pub mod response {
    use crate::{modules::user::repository::UserProfile, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        LoggedIn {
            access_token: String,
            user: UserProfile,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn { access_token, user } => (
                    StatusCode::OK,
                    Json(json!({ "accessToken": access_token, "user": user })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidCredentials,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid credentials" })),
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
