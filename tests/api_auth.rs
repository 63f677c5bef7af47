mod common;

use axum::http::StatusCode;
use restaurant_backend_rs::modules::{
    auth::service::{auth, jwt},
    user::repository::{self as users, CreateUserPayload, Role},
};
use serde_json::json;

#[tokio::test]
async fn health_endpoint_responds() {
    let app = common::spawn().await;

    let (status, body) = app.get("/api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = common::spawn().await;

    let (status, body) = app.get("/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Restaurant API");
    assert!(body["paths"]["/api/meals"]["get"].is_object());
    assert!(body["paths"]["/api/auth/login"]["post"].is_object());
    assert_eq!(
        body["components"]["securitySchemes"]["bearer"]["scheme"],
        "bearer"
    );
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = common::spawn().await;
    app.register_customer("chidi@example.com").await;

    let (status, body) = app
        .post(
            "/api/auth/register/customer",
            None,
            json!({
                "email": "chidi@example.com",
                "password": "another-secret",
                "firstName": "Chidi",
                "lastName": "Eze"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User with this email already exists");

    let (status, _) = app
        .post(
            "/api/auth/register/restaurant-owner",
            None,
            common::restaurant_owner("CHIDI@example.com"),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn second_owner_registration_leaves_no_partial_rows() {
    let app = common::spawn().await;
    app.register_owner("ada@example.com").await;

    let mut second = common::restaurant_owner("ada@example.com");
    second["restaurantName"] = json!("Second Kitchen");
    let (status, body) = app
        .post("/api/auth/register/restaurant-owner", None, second)
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User with this email already exists");

    let (_, restaurants) = app.get("/api/restaurants", None).await;
    assert_eq!(restaurants.as_array().unwrap().len(), 1);
    assert_eq!(restaurants[0]["name"], "Mama Put");
}

#[tokio::test]
async fn customer_registration_returns_public_user() {
    let app = common::spawn().await;

    let (_, body) = app.register_customer("chidi@example.com").await;

    assert_eq!(body["user"]["email"], "chidi@example.com");
    assert_eq!(body["user"]["role"], "customer");
    assert_eq!(body["user"]["firstName"], "Chidi");
    assert!(body["user"]["restaurant"].is_null());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn owner_registration_creates_restaurant() {
    let app = common::spawn().await;

    let (token, body) = app.register_owner("ada@example.com").await;

    let user = &body["user"];
    assert_eq!(user["role"], "restaurant_owner");
    assert_eq!(user["restaurant"]["name"], "Mama Put");
    assert_eq!(user["restaurant"]["address"], "12 Allen Avenue, Ikeja");
    assert_eq!(user["restaurant"]["cuisine"], "Nigerian");
    assert_eq!(user["restaurant"]["ownerId"], user["id"]);

    let (status, mine) = app.get("/api/restaurants/my/restaurant", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine["id"], user["restaurant"]["id"]);
    assert_eq!(mine["owner"]["email"], "ada@example.com");
}

#[tokio::test]
async fn invalid_registration_is_rejected() {
    let app = common::spawn().await;

    let (status, body) = app
        .post(
            "/api/auth/register/customer",
            None,
            json!({
                "email": "not-an-email",
                "password": "123",
                "firstName": "C",
                "lastName": "Eze"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
async fn unknown_fields_are_rejected() {
    let app = common::spawn().await;

    let (status, _) = app
        .post(
            "/api/auth/register/customer",
            None,
            json!({
                "email": "chidi@example.com",
                "password": "secret123",
                "firstName": "Chidi",
                "lastName": "Eze",
                "role": "admin"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_checks_password_and_issues_token_for_user() {
    let app = common::spawn().await;
    let (_, registered) = app.register_owner("ada@example.com").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, _) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": "secret123" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "secret123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["restaurant"]["name"], "Mama Put");

    let claims = jwt::decode_token(&common::token_of(&body), common::JWT_SECRET).unwrap();
    assert_eq!(claims.sub, registered["user"]["id"].as_str().unwrap());
    assert_eq!(claims.role, Role::RestaurantOwner);
    assert_eq!(claims.email, "ada@example.com");
}

#[tokio::test]
async fn profile_requires_a_valid_token() {
    let app = common::spawn().await;
    let (token, registered) = app.register_customer("chidi@example.com").await;

    let (status, _) = app.get("/api/auth/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/auth/profile", Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.get("/api/auth/profile", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], registered["user"]["id"]);
    assert!(body["createdAt"].is_string());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn owner_without_restaurant_can_create_one_once() {
    let app = common::spawn().await;
    let user = users::create(
        &app.ctx.db_conn.pool,
        CreateUserPayload {
            email: String::from("late@example.com"),
            password: String::from("unused"),
            first_name: String::from("Late"),
            last_name: String::from("Owner"),
            role: Role::RestaurantOwner,
        },
    )
    .await
    .unwrap();
    let token = auth::create_access_token(app.ctx.clone(), &user).unwrap();

    for uri in [
        "/api/restaurants/my/restaurant",
        "/api/meals/my/meals",
    ] {
        let (status, _) = app.get(uri, Some(&token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }

    let restaurant = json!({ "name": "Late Bites", "address": "3 Marina Road, Lagos" });
    let (status, body) = app
        .post("/api/auth/restaurant", Some(&token), restaurant.clone())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ownerId"], user.id.as_str());

    let (status, _) = app
        .post("/api/auth/restaurant", Some(&token), restaurant)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn customers_cannot_create_restaurants() {
    let app = common::spawn().await;
    let (token, _) = app.register_customer("chidi@example.com").await;

    let (status, _) = app
        .post(
            "/api/auth/restaurant",
            Some(&token),
            json!({ "name": "Sneaky", "address": "1 Nowhere Street, Abuja" }),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
