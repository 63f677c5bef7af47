use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: SqlitePool,
}

pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database lives as long as its connection, so the pool must
    // never recycle it.
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|err| {
            tracing::error!("Error connecting to database {}: {}", database_url, err);
            err
        })?;

    Ok(DatabaseConnection { pool })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        err
    })
}
