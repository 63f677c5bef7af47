use restaurant_backend_rs::{
    app::{self, App},
    types::{Config, ToContext},
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    app::init_tracing();

    let ctx = match Config::default().to_context().await {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to initialize application context: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server stopped unexpectedly: {}", err);
        std::process::exit(1);
    }
}
