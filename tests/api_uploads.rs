mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

const MB: usize = 1024 * 1024;

fn file_name(body: &Value) -> String {
    body["fileName"].as_str().unwrap().to_string()
}

async fn served(app: &common::TestApp, file_name: &str) -> (StatusCode, Vec<u8>) {
    app.send(
        Request::builder()
            .uri(format!("/uploads/{file_name}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn restaurant_image_is_stored_and_served() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    let contents: Vec<u8> = (0..MB).map(|n| (n % 251) as u8).collect();

    let (status, body) = app
        .upload(
            "/api/restaurants/my/restaurant/upload-image",
            &token,
            "front.png",
            "image/png",
            &contents,
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let name = file_name(&body);
    assert!(name.ends_with(".png"));
    assert_eq!(body["imageUrl"], format!("/uploads/{name}"));

    let (status, bytes) = served(&app, &name).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, contents);

    let (_, mine) = app.get("/api/restaurants/my/restaurant", Some(&token)).await;
    assert_eq!(mine["profileImage"], name.as_str());
}

#[tokio::test]
async fn invalid_images_are_rejected() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;

    let (status, body) = app
        .upload(
            "/api/restaurants/my/restaurant/upload-image",
            &token,
            "huge.png",
            "image/png",
            &vec![0; 6 * MB],
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = app
        .upload(
            "/api/restaurants/my/restaurant/upload-image",
            &token,
            "anim.gif",
            "image/gif",
            &[0; 128],
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, mine) = app.get("/api/restaurants/my/restaurant", Some(&token)).await;
    assert!(mine["profileImage"].is_null());
}

#[tokio::test]
async fn replacing_an_image_removes_the_old_file() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    let uri = "/api/restaurants/my/restaurant/upload-image";

    let (_, first) = app.upload(uri, &token, "a.jpg", "image/jpeg", &[1; 32]).await;
    let (status, second) = app.upload(uri, &token, "b.webp", "image/webp", &[2; 32]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!app.upload_path(&file_name(&first)).exists());
    assert!(app.upload_path(&file_name(&second)).exists());

    let (status, _) = app
        .delete("/api/restaurants/my/restaurant/image", Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!app.upload_path(&file_name(&second)).exists());

    let (_, mine) = app.get("/api/restaurants/my/restaurant", Some(&token)).await;
    assert!(mine["profileImage"].is_null());
}

#[tokio::test]
async fn deleting_a_meal_removes_its_image() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    let meal = app.create_meal(&token, "Jollof Rice", 15.0).await;
    let id = meal["id"].as_str().unwrap();

    let (status, body) = app
        .upload(
            &format!("/api/meals/{id}/upload-image"),
            &token,
            "jollof.png",
            "image/png",
            &[7; 256],
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let name = file_name(&body);
    assert!(app.upload_path(&name).exists());

    let (_, stored) = app.get(&format!("/api/meals/{id}"), None).await;
    assert_eq!(stored["image"], name.as_str());

    let (status, _) = app.delete(&format!("/api/meals/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    assert!(!app.upload_path(&name).exists());
    let (status, _) = served(&app, &name).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_owners_cannot_upload_meal_images() {
    let app = common::spawn().await;
    let (ada, _) = app.register_owner("ada@example.com").await;
    let (bola, _) = app.register_owner("bola@example.com").await;
    let meal = app.create_meal(&ada, "Jollof Rice", 15.0).await;
    let id = meal["id"].as_str().unwrap();

    let (status, _) = app
        .upload(
            &format!("/api/meals/{id}/upload-image"),
            &bola,
            "jollof.png",
            "image/png",
            &[7; 64],
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .delete(&format!("/api/meals/{id}/image"), Some(&bola))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_restaurant_removes_meal_images() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;
    let meal = app.create_meal(&token, "Jollof Rice", 15.0).await;
    let id = meal["id"].as_str().unwrap();

    let (_, meal_image) = app
        .upload(
            &format!("/api/meals/{id}/upload-image"),
            &token,
            "jollof.png",
            "image/png",
            &[7; 64],
        )
        .await;
    let (_, profile) = app
        .upload(
            "/api/restaurants/my/restaurant/upload-image",
            &token,
            "front.jpg",
            "image/jpeg",
            &[9; 64],
        )
        .await;

    let (status, _) = app.delete("/api/restaurants/my/restaurant", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    assert!(!app.upload_path(&file_name(&meal_image)).exists());
    assert!(!app.upload_path(&file_name(&profile)).exists());
}

#[tokio::test]
async fn image_names_cannot_be_set_through_json_bodies() {
    let app = common::spawn().await;
    let (ada, _) = app.register_owner("ada@example.com").await;
    let (bola, _) = app.register_owner("bola@example.com").await;
    let ada_meal = app.create_meal(&ada, "Ofada Rice", 11.0).await;
    let bola_meal = app.create_meal(&bola, "Amala", 7.0).await;
    let ada_uri = format!("/api/meals/{}", ada_meal["id"].as_str().unwrap());

    let (_, uploaded) = app
        .upload(
            &format!("/api/meals/{}/upload-image", bola_meal["id"].as_str().unwrap()),
            &bola,
            "amala.png",
            "image/png",
            &[3; 64],
        )
        .await;
    let bola_file = file_name(&uploaded);

    let (status, _) = app
        .patch(&ada_uri, Some(&ada), serde_json::json!({ "image": bola_file }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .patch(
            "/api/restaurants/my/restaurant",
            Some(&ada),
            serde_json::json!({ "profileImage": bola_file }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .delete(&format!("{ada_uri}/image"), Some(&ada))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .delete("/api/restaurants/my/restaurant/image", Some(&ada))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.delete(&ada_uri, Some(&ada)).await;
    assert_eq!(status, StatusCode::OK);

    assert!(app.upload_path(&bola_file).exists());
    let (status, bytes) = served(&app, &bola_file).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, vec![3; 64]);
}

#[tokio::test]
async fn stored_extension_matches_the_content_type() {
    let app = common::spawn().await;
    let (token, _) = app.register_owner("ada@example.com").await;

    let (status, body) = app
        .upload(
            "/api/restaurants/my/restaurant/upload-image",
            &token,
            "x.html",
            "image/png",
            b"<script>alert(1)</script>",
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(file_name(&body).ends_with(".png"));
}
