use super::{auth, meal, restaurant, user};
use crate::{types::Context, utils::pagination::PaginatedMeta};
use axum::{
    response::IntoResponse,
    routing::{get, Router},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi, ToSchema,
};

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub user: user::repository::UserProfile,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploaded {
    pub message: String,
    #[schema(example = "/uploads/01J6ZK3V6Q8Y2W5B7N9M4C1D0E.png")]
    pub image_url: String,
    pub file_name: String,
}

/// Multipart body of the image upload endpoints.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    /// JPEG, PNG or WebP, at most 5 MB.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Serialize, ToSchema)]
pub struct MealPage {
    pub data: Vec<meal::repository::MealWithRestaurant>,
    pub meta: PaginatedMeta,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Restaurant API", description = "Restaurants, their meals and the people who run them"),
    paths(
        auth::routes::register_customer::handler::handler,
        auth::routes::register_restaurant_owner::handler::handler,
        auth::routes::login::handler::handler,
        auth::routes::profile::handler::handler,
        auth::routes::create_restaurant::handler::handler,
        restaurant::routes::list::handler::handler,
        restaurant::routes::get::handler::handler,
        restaurant::routes::get_mine::handler::handler,
        restaurant::routes::update_mine::handler::handler,
        restaurant::routes::delete_mine::handler::handler,
        restaurant::routes::upload_image::handler::handler,
        restaurant::routes::delete_image::handler::handler,
        meal::routes::list::handler::handler,
        meal::routes::list_mine::handler::handler,
        meal::routes::get::handler::handler,
        meal::routes::create::handler::handler,
        meal::routes::update::handler::handler,
        meal::routes::delete::handler::handler,
        meal::routes::upload_image::handler::handler,
        meal::routes::delete_image::handler::handler,
    ),
    components(schemas(
        user::repository::Role,
        user::repository::UserProfile,
        restaurant::repository::Restaurant,
        restaurant::repository::OwnerSummary,
        restaurant::repository::RestaurantWithOwner,
        meal::repository::Meal,
        meal::repository::MealOwner,
        meal::repository::MealRestaurant,
        meal::repository::MealWithRestaurant,
        PaginatedMeta,
        MealPage,
        AuthResponse,
        ErrorResponse,
        MessageResponse,
        ImageUpload,
        ImageUploaded,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Registration, login and profile"),
        (name = "restaurants", description = "Restaurant listing and owner management"),
        (name = "meals", description = "Meal catalogue and owner management"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/docs/openapi.json", get(openapi_json))
}
