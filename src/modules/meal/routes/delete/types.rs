pub mod request {
    use crate::modules::auth::middleware::RestaurantOwnerAuth;

    pub struct Payload {
        pub id: String,
        pub auth: RestaurantOwnerAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MealDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Meal deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        RestaurantNotFound,
        MealNotFound,
        FailedToDeleteMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found for this user" })),
                )
                    .into_response(),
                Self::MealNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Meal not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
