mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|meal| meal["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn owner_creates_meal_for_own_restaurant() {
    let app = common::spawn().await;
    let (token, owner) = app.register_owner("ada@example.com").await;

    let meal = app.create_meal(&token, "Jollof Rice", 15.99).await;

    assert_eq!(meal["price"], "15.99");
    assert_eq!(meal["isAvailable"], true);
    assert_eq!(meal["restaurantId"], owner["user"]["restaurant"]["id"]);
    assert!(meal["image"].is_null());

    let uri = format!("/api/meals/{}", meal["id"].as_str().unwrap());
    let (status, body) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jollof Rice");
    assert_eq!(body["restaurant"]["name"], "Mama Put");
    assert_eq!(body["restaurant"]["owner"]["firstName"], "Ada");
}

#[tokio::test]
async fn meal_creation_is_guarded() {
    let app = common::spawn().await;
    let (customer, _) = app.register_customer("chidi@example.com").await;

    let (status, _) = app
        .post("/api/meals", None, common::meal("Suya", 5.0))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .post("/api/meals", Some(&customer), common::meal("Suya", 5.0))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Only restaurant owners can perform this action");
}

#[tokio::test]
async fn invalid_meals_are_rejected() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;

    for price in [0.0, 1000.0, 1.005] {
        let (status, body) = app
            .post("/api/meals", Some(&token), common::meal("Suya", price))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
        assert!(body["errors"]["price"].is_array(), "{price}");
    }

    let (status, _) = app
        .post(
            "/api/meals",
            Some(&token),
            json!({ "name": "Suya", "description": "short", "price": 5.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/meals",
            Some(&token),
            json!({
                "name": "Suya",
                "description": "Spicy grilled beef skewers",
                "price": 5.0,
                "restaurantId": "someone-else"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn price_range_filter_is_inclusive() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    app.create_meal(&token, "Puff Puff", 5.0).await;
    app.create_meal(&token, "Jollof Rice", 15.0).await;
    app.create_meal(&token, "Peppered Goat", 25.0).await;

    let (status, body) = app.get("/api/meals?minPrice=10&maxPrice=20", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Jollof Rice"]);
    assert_eq!(body["data"][0]["price"], "15.00");
    assert_eq!(body["meta"]["total"], 1);

    let (_, body) = app.get("/api/meals?minPrice=15&maxPrice=25", None).await;
    assert_eq!(body["meta"]["total"], 2);
}

#[tokio::test]
async fn meals_are_paginated() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    for n in 0..25 {
        app.create_meal(&token, &format!("Meal {n:02}"), 10.0).await;
    }

    let (status, first) = app.get("/api/meals?page=1&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"].as_array().unwrap().len(), 10);
    assert_eq!(
        first["meta"],
        json!({
            "total": 25,
            "page": 1,
            "limit": 10,
            "totalPages": 3,
            "hasNext": true,
            "hasPrev": false
        })
    );

    let (_, last) = app.get("/api/meals?page=3&limit=10", None).await;
    assert_eq!(last["data"].as_array().unwrap().len(), 5);
    assert_eq!(last["meta"]["hasNext"], false);
    assert_eq!(last["meta"]["hasPrev"], true);

    let (status, _) = app.get("/api/meals?limit=101", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/meals?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn meals_can_be_searched_and_sorted() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    app.create_meal(&token, "Beef Suya", 8.0).await;
    app.create_meal(&token, "Chicken Suya", 9.5).await;
    app.create_meal(&token, "Egusi Soup", 12.0).await;

    let (_, body) = app.get("/api/meals?search=SUYA&sortBy=name&sortOrder=asc", None).await;
    assert_eq!(names(&body), vec!["Beef Suya", "Chicken Suya"]);

    let (_, body) = app.get("/api/meals?sortBy=price&sortOrder=DESC", None).await;
    assert_eq!(names(&body), vec!["Egusi Soup", "Chicken Suya", "Beef Suya"]);

    let (status, _) = app.get("/api/meals?sortBy=password", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_matches_description_too() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    app.create_meal(&token, "Jollof Rice", 12.0).await;
    let (status, _) = app
        .post(
            "/api/meals",
            Some(&token),
            json!({
                "name": "Point and Kill",
                "description": "Fresh catfish pepper soup",
                "price": 18.0
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app.get("/api/meals?search=CATFISH", None).await;

    assert_eq!(names(&body), vec!["Point and Kill"]);
    assert_eq!(body["meta"]["total"], 1);
}

#[tokio::test]
async fn search_is_case_insensitive_beyond_ascii() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    let eclair = app.create_meal(&token, "Éclair Royale", 6.5).await;
    app.create_meal(&token, "Puff Puff", 3.0).await;

    for search in ["%C3%89CLAIR", "%C3%A9clair", "royale"] {
        let (_, body) = app.get(&format!("/api/meals?search={search}"), None).await;
        assert_eq!(names(&body), vec!["Éclair Royale"], "{search}");
    }

    let uri = format!("/api/meals/{}", eclair["id"].as_str().unwrap());
    let (status, _) = app
        .patch(&uri, Some(&token), json!({ "name": "Œufs Mimosa" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/meals?search=%C5%93ufs", None).await;
    assert_eq!(names(&body), vec!["Œufs Mimosa"]);
    let (_, body) = app.get("/api/meals?search=%C3%A9clair", None).await;
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn availability_filter_and_update() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    let meal = app.create_meal(&token, "Moi Moi", 4.5).await;
    app.create_meal(&token, "Akara", 3.0).await;
    let uri = format!("/api/meals/{}", meal["id"].as_str().unwrap());

    let (status, updated) = app
        .patch(&uri, Some(&token), json!({ "isAvailable": false, "price": 4.75 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isAvailable"], false);
    assert_eq!(updated["price"], "4.75");
    assert_eq!(updated["name"], "Moi Moi");

    let (_, body) = app.get("/api/meals?isAvailable=true", None).await;
    assert_eq!(names(&body), vec!["Akara"]);

    let (_, body) = app.get("/api/meals?isAvailable=false", None).await;
    assert_eq!(names(&body), vec!["Moi Moi"]);
}

#[tokio::test]
async fn my_meals_only_lists_own_restaurant() {
    let app = common::spawn().await;
    let (ada, _) = app.register_owner("ada@example.com").await;
    let (bola, _) = app.register_owner("bola@example.com").await;
    app.create_meal(&ada, "Ofada Rice", 11.0).await;
    app.create_meal(&bola, "Amala", 7.0).await;

    let (status, body) = app.get("/api/meals/my/meals", Some(&bola)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Amala"]);
    assert_eq!(body["meta"]["total"], 1);

    let (_, body) = app.get("/api/meals", None).await;
    assert_eq!(body["meta"]["total"], 2);
}

#[tokio::test]
async fn other_owners_cannot_touch_a_meal() {
    let app = common::spawn().await;
    let (ada, _) = app.register_owner("ada@example.com").await;
    let (bola, _) = app.register_owner("bola@example.com").await;
    let meal = app.create_meal(&ada, "Ofada Rice", 11.0).await;
    let uri = format!("/api/meals/{}", meal["id"].as_str().unwrap());

    let (status, body) = app
        .patch(&uri, Some(&bola), json!({ "name": "Stolen Rice" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Meal not found");

    let (status, _) = app.delete(&uri, Some(&bola)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ofada Rice");
}

#[tokio::test]
async fn owner_deletes_meal() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    let meal = app.create_meal(&token, "Ofada Rice", 11.0).await;
    let uri = format!("/api/meals/{}", meal["id"].as_str().unwrap());

    let (status, _) = app.delete(&uri, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&uri, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_meal_is_not_found() {
    let app = common::spawn().await;

    let (status, body) = app.get("/api/meals/01J00000000000000000000000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Meal not found");
}
