use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, services::ServeDir, trace};
use tracing_subscriber::prelude::*;

const MAX_BODY_SIZE: usize = 1024 * 1024 * 10;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();
}

/// Builds the full HTTP surface: the JSON API under `/api` and the uploaded files.
pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/api", modules::get_router())
        .nest_service(
            ctx.storage.public_path.as_str(),
            ServeDir::new(ctx.storage.upload_dir.clone()),
        )
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(cors::Any),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!(
            "App is running on {}:{} ({:?}), public url {}",
            self.ctx.app.host,
            self.ctx.app.port,
            self.ctx.app.environment,
            self.ctx.app.url
        );

        axum::serve(listener, self.router).await
    }
}
