use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqliteExecutor;
use ulid::Ulid;
use utoipa::ToSchema;

use crate::modules::restaurant::repository::Restaurant;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Role {
    Customer,
    RestaurantOwner,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::RestaurantOwner => write!(f, "restaurant_owner"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Public view of a user together with the restaurant it owns, if any.
#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub restaurant: Option<Restaurant>,
    pub created_at: NaiveDateTime,
}

impl UserProfile {
    pub fn new(user: User, restaurant: Option<Restaurant>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            restaurant,
            created_at: user.created_at,
        }
    }
}

pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

#[derive(Debug)]
pub enum Error {
    EmailAlreadyInUse,
    UnexpectedError,
}

pub async fn create<'e, E>(e: E, payload: CreateUserPayload) -> Result<User>
where
    E: SqliteExecutor<'e>,
{
    let now = Utc::now().naive_utc();

    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, email, password, first_name, last_name, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email.to_lowercase())
    .bind(payload.password)
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(payload.role)
    .bind(now)
    .fetch_one(e)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(err) if err.is_unique_violation() => Error::EmailAlreadyInUse,
        err => {
            tracing::error!("Error occured while creating a user account: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: SqliteExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email.to_lowercase())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

pub fn has_role(user: &User, role: Role) -> bool {
    user.role == role
}
