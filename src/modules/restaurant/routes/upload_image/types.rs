pub mod request {
    use crate::modules::auth::middleware::RestaurantOwnerAuth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        #[form_data(limit = "10MiB")]
        pub file: FieldData<NamedTempFile>,
    }

    pub struct Payload {
        pub auth: RestaurantOwnerAuth,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ImageUploaded { image_url: String, file_name: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ImageUploaded {
                    image_url,
                    file_name,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Restaurant image uploaded successfully",
                        "imageUrl": image_url,
                        "fileName": file_name,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFile(&'static str),
        RestaurantNotFound,
        FailedToUploadImage,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFile(message) => {
                    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
                }
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found for this user" })),
                )
                    .into_response(),
                Self::FailedToUploadImage => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload image" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
