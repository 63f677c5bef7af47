#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use restaurant_backend_rs::{
    app,
    types::{
        AppConfig, AppEnvironment, AuthConfig, Config, Context, DatabaseConfig, StorageConfig,
        ToContext,
    },
};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-test-secret";
const BOUNDARY: &str = "restaurant-backend-test-boundary";

pub struct TestApp {
    pub ctx: Arc<Context>,
    pub router: Router,
    upload_dir: TempDir,
}

pub async fn spawn() -> TestApp {
    let upload_dir = tempfile::tempdir().expect("failed to create upload dir");

    let config = Config {
        database: DatabaseConfig {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
        },
        app: AppConfig {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 0,
            url: String::from("http://127.0.0.1"),
        },
        storage: StorageConfig {
            upload_dir: upload_dir.path().to_path_buf(),
            public_path: String::from("/uploads"),
        },
        auth: AuthConfig {
            jwt_secret: String::from(JWT_SECRET),
            jwt_expires_in: 3600,
        },
    };

    let ctx = Arc::new(config.to_context().await.expect("failed to build context"));

    TestApp {
        router: app::router(ctx.clone()),
        ctx,
        upload_dir,
    }
}

pub fn restaurant_owner(email: &str) -> Value {
    json!({
        "email": email,
        "password": "secret123",
        "firstName": "Ada",
        "lastName": "Obi",
        "restaurantName": "Mama Put",
        "restaurantAddress": "12 Allen Avenue, Ikeja",
        "restaurantDescription": "Home style jollof and suya",
        "restaurantPhone": "+2348012345678",
        "restaurantCuisine": "Nigerian"
    })
}

pub fn meal(name: &str, price: f64) -> Value {
    json!({
        "name": name,
        "description": "A generous plate with plenty of sides",
        "price": price
    })
}

impl TestApp {
    pub fn upload_path(&self, file_name: &str) -> std::path::PathBuf {
        self.upload_dir.path().join(file_name)
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");

        (status, bytes.to_vec())
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("invalid request");

        let (status, bytes) = self.send(request).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    pub async fn upload(
        &self,
        uri: &str,
        token: &str,
        file_name: &str,
        content_type: &str,
        contents: &[u8],
    ) -> (StatusCode, Value) {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("invalid request");

        let (status, bytes) = self.send(request).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    /// Registers a restaurant owner and returns the access token and the response body.
    pub async fn register_owner(&self, email: &str) -> (String, Value) {
        let (status, body) = self
            .post(
                "/api/auth/register/restaurant-owner",
                None,
                restaurant_owner(email),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        (token_of(&body), body)
    }

    pub async fn register_customer(&self, email: &str) -> (String, Value) {
        let (status, body) = self
            .post(
                "/api/auth/register/customer",
                None,
                json!({
                    "email": email,
                    "password": "secret123",
                    "firstName": "Chidi",
                    "lastName": "Eze"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        (token_of(&body), body)
    }

    pub async fn create_meal(&self, token: &str, name: &str, price: f64) -> Value {
        let (status, body) = self.post("/api/meals", Some(token), meal(name, price)).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        body
    }
}

pub fn token_of(body: &Value) -> String {
    body["accessToken"]
        .as_str()
        .expect("missing access token")
        .to_string()
}
