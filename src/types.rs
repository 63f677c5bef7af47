pub use crate::utils::database;
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;

const DEVELOPMENT_JWT_SECRET: &str = "development-secret-change-me";

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl From<String> for AppEnvironment {
    fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub upload_dir: PathBuf,
    pub public_path: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub storage: StorageContext,
    pub auth: AuthContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub public_path: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://restaurants.db".to_string());
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<u32>()
            .expect("Invalid DATABASE_MAX_CONNECTIONS");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment =
            AppEnvironment::from(env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()));
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let jwt_secret = match environment {
            AppEnvironment::Production => env::var("JWT_SECRET").expect("JWT_SECRET not set"),
            AppEnvironment::Development => {
                env::var("JWT_SECRET").unwrap_or_else(|_| DEVELOPMENT_JWT_SECRET.to_string())
            }
        };
        let jwt_expires_in = env::var("JWT_EXPIRES_IN")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRES_IN");

        Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections: database_max_connections,
            },
            app: AppConfig {
                host,
                environment,
                port,
                url,
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from(upload_dir),
                public_path: String::from("/uploads"),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expires_in,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("failed to connect to the database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to prepare the upload directory: {0}")]
    Storage(#[from] std::io::Error),
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ContextError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ContextError> {
        let db_conn =
            database::connect(self.database.url.as_str(), self.database.max_connections).await?;
        database::migrate(&db_conn).await?;

        tokio::fs::create_dir_all(&self.storage.upload_dir).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            storage: StorageContext {
                upload_dir: self.storage.upload_dir,
                public_path: self.storage.public_path,
            },
            auth: AuthContext {
                jwt_secret: self.auth.jwt_secret,
                jwt_expires_in: self.auth.jwt_expires_in,
            },
        })
    }
}
