use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqliteExecutor;
use ulid::Ulid;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    pub profile_image: Option<String>,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct RestaurantWithOwner {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub owner: OwnerSummary,
}

#[derive(sqlx::FromRow)]
struct RestaurantWithOwnerRow {
    #[sqlx(flatten)]
    restaurant: Restaurant,
    owner_email: String,
    owner_first_name: String,
    owner_last_name: String,
}

impl From<RestaurantWithOwnerRow> for RestaurantWithOwner {
    fn from(row: RestaurantWithOwnerRow) -> Self {
        Self {
            owner: OwnerSummary {
                id: row.restaurant.owner_id.clone(),
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email: row.owner_email,
            },
            restaurant: row.restaurant,
        }
    }
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    pub owner_id: String,
}

#[derive(Default)]
pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub cuisine: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    OwnerAlreadyHasRestaurant,
    UnexpectedError,
}

const SELECT_WITH_OWNER: &str = "
    SELECT
        restaurants.*,
        users.email AS owner_email,
        users.first_name AS owner_first_name,
        users.last_name AS owner_last_name
    FROM restaurants
    INNER JOIN users ON users.id = restaurants.owner_id
";

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant, Error> {
    let now = Utc::now().naive_utc();

    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (
            id,
            name,
            description,
            address,
            phone,
            cuisine,
            owner_id,
            created_at,
            updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.address)
    .bind(payload.phone)
    .bind(payload.cuisine)
    .bind(payload.owner_id)
    .bind(now)
    .fetch_one(e)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(err) if err.is_unique_violation() => {
            Error::OwnerAlreadyHasRestaurant
        }
        err => {
            tracing::error!("Error occurred while trying to create a restaurant: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<RestaurantWithOwner>, Error> {
    sqlx::query_as::<_, RestaurantWithOwnerRow>(&format!(
        "{SELECT_WITH_OWNER} WHERE restaurants.id = $1"
    ))
    .bind(&id)
    .fetch_optional(e)
    .await
    .map(|row| row.map(RestaurantWithOwner::from))
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch restaurant {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(e: E) -> Result<Vec<RestaurantWithOwner>, Error> {
    sqlx::query_as::<_, RestaurantWithOwnerRow>(&format!(
        "{SELECT_WITH_OWNER} ORDER BY restaurants.created_at DESC, restaurants.id DESC"
    ))
    .fetch_all(e)
    .await
    .map(|rows| rows.into_iter().map(RestaurantWithOwner::from).collect())
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch restaurants: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_owner_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE owner_id = $1")
        .bind(&owner_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch restaurant of owner {}: {}",
                owner_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<Restaurant, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            address = COALESCE($3, address),
            phone = COALESCE($4, phone),
            cuisine = COALESCE($5, cuisine),
            updated_at = $6
        WHERE
            id = $7
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.address)
    .bind(payload.phone)
    .bind(payload.cuisine)
    .bind(Utc::now().naive_utc())
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update restaurant: {}", err);
        Error::UnexpectedError
    })
}

/// Overwrites the stored profile image name, `None` clears it.
pub async fn set_profile_image<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: String,
    profile_image: Option<String>,
) -> Result<(), Error> {
    sqlx::query("UPDATE restaurants SET profile_image = $1, updated_at = $2 WHERE id = $3")
        .bind(profile_image)
        .bind(Utc::now().naive_utc())
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to set restaurant profile image: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete restaurant: {}", err);
            Error::UnexpectedError
        })
}
