use bigdecimal::BigDecimal;
use chrono::{NaiveDateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::SqliteExecutor;
use ulid::Ulid;
use utoipa::ToSchema;

use crate::utils::pagination::{Paginated, Pagination};

const CENTS_EPSILON: f64 = 1e-6;

/// Meal price held as an exact number of cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a decimal amount, rejecting anything with more than two decimal places.
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let scaled = amount * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > CENTS_EPSILON {
            return None;
        }

        Some(Self(cents as i64))
    }

    /// Smallest price that is >= `amount`.
    pub fn at_least(amount: f64) -> Self {
        Self((amount * 100.0 - CENTS_EPSILON).ceil() as i64)
    }

    /// Largest price that is <= `amount`.
    pub fn at_most(amount: f64) -> Self {
        Self((amount * 100.0 + CENTS_EPSILON).floor() as i64)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.0), 2)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.to_decimal())
    }
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "price_cents")]
    #[schema(value_type = String, example = "15.99")]
    pub price: Price,
    pub image: Option<String>,
    pub is_available: bool,
    pub restaurant_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealOwner {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealRestaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub cuisine: Option<String>,
    pub profile_image: Option<String>,
    pub owner: MealOwner,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct MealWithRestaurant {
    #[serde(flatten)]
    pub meal: Meal,
    pub restaurant: MealRestaurant,
}

#[derive(sqlx::FromRow)]
struct MealWithRestaurantRow {
    #[sqlx(flatten)]
    meal: Meal,
    restaurant_name: String,
    restaurant_address: String,
    restaurant_cuisine: Option<String>,
    restaurant_profile_image: Option<String>,
    owner_id: String,
    owner_first_name: String,
    owner_last_name: String,
}

impl From<MealWithRestaurantRow> for MealWithRestaurant {
    fn from(row: MealWithRestaurantRow) -> Self {
        Self {
            restaurant: MealRestaurant {
                id: row.meal.restaurant_id.clone(),
                name: row.restaurant_name,
                address: row.restaurant_address,
                cuisine: row.restaurant_cuisine,
                profile_image: row.restaurant_profile_image,
                owner: MealOwner {
                    id: row.owner_id,
                    first_name: row.owner_first_name,
                    last_name: row.owner_last_name,
                },
            },
            meal: row.meal,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Name,
    Price,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortBy {
    fn column(&self) -> &'static str {
        match self {
            Self::Name => "meals.name",
            Self::Price => "meals.price_cents",
            Self::CreatedAt => "meals.created_at",
            Self::UpdatedAt => "meals.updated_at",
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, ToSchema)]
pub enum SortOrder {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[default]
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SortOrder {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct Filters {
    pub search: Option<String>,
    pub restaurant_id: Option<String>,
    pub is_available: Option<bool>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

pub struct CreateMealPayload {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub is_available: bool,
    pub restaurant_id: String,
}

#[derive(Default)]
pub struct UpdateMealPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub is_available: Option<bool>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_WITH_RESTAURANT: &str = "
    SELECT
        meals.*,
        restaurants.name AS restaurant_name,
        restaurants.address AS restaurant_address,
        restaurants.cuisine AS restaurant_cuisine,
        restaurants.profile_image AS restaurant_profile_image,
        users.id AS owner_id,
        users.first_name AS owner_first_name,
        users.last_name AS owner_last_name
    FROM meals
    INNER JOIN restaurants ON restaurants.id = meals.restaurant_id
    INNER JOIN users ON users.id = restaurants.owner_id
";

const FILTERS: &str = "
    WHERE
        ($1 IS NULL OR meals.search_text LIKE $1)
        AND ($2 IS NULL OR meals.restaurant_id = $2)
        AND ($3 IS NULL OR meals.is_available = $3)
        AND ($4 IS NULL OR meals.price_cents >= $4)
        AND ($5 IS NULL OR meals.price_cents <= $5)
";

/// Lowercased name and description that `search` is matched against.
/// SQLite only folds ASCII, so the folding happens here.
fn search_text(name: &str, description: &str) -> String {
    format!("{}\n{}", name.to_lowercase(), description.to_lowercase())
}

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreateMealPayload,
) -> Result<Meal, Error> {
    let now = Utc::now().naive_utc();
    let search_text = search_text(&payload.name, &payload.description);

    sqlx::query_as::<_, Meal>(
        "
        INSERT INTO meals (
            id,
            name,
            description,
            price_cents,
            is_available,
            restaurant_id,
            search_text,
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
    .bind(payload.price)
    .bind(payload.is_available)
    .bind(payload.restaurant_id)
    .bind(search_text)
    .bind(now)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a meal: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<MealWithRestaurant>, Error> {
    sqlx::query_as::<_, MealWithRestaurantRow>(&format!(
        "{SELECT_WITH_RESTAURANT} WHERE meals.id = $1"
    ))
    .bind(&id)
    .fetch_optional(e)
    .await
    .map(|row| row.map(MealWithRestaurant::from))
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch meal {}: {}", id, err);
        Error::UnexpectedError
    })
}

/// Looks a meal up only within the given restaurant, so meals of other
/// restaurants resolve to `None`.
pub async fn find_by_id_and_restaurant_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: String,
    restaurant_id: String,
) -> Result<Option<Meal>, Error> {
    sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE id = $1 AND restaurant_id = $2")
        .bind(id)
        .bind(restaurant_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch owned meal: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e> + Copy>(
    e: E,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<MealWithRestaurant>, Error> {
    let search = filters
        .search
        .filter(|search| !search.is_empty())
        .map(|search| format!("%{}%", search.to_lowercase()));

    let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM meals {FILTERS}"))
        .bind(search.clone())
        .bind(filters.restaurant_id.clone())
        .bind(filters.is_available)
        .bind(filters.min_price)
        .bind(filters.max_price)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count meals: {}", err);
            Error::UnexpectedError
        })?;

    let meals = sqlx::query_as::<_, MealWithRestaurantRow>(&format!(
        "{SELECT_WITH_RESTAURANT} {FILTERS} ORDER BY {column} {order}, meals.id {order} LIMIT $6 OFFSET $7",
        column = filters.sort_by.column(),
        order = filters.sort_order.keyword(),
    ))
    .bind(search)
    .bind(filters.restaurant_id)
    .bind(filters.is_available)
    .bind(filters.min_price)
    .bind(filters.max_price)
    .bind(pagination.limit)
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch meals: {}", err);
        Error::UnexpectedError
    })?;

    Ok(Paginated::new(
        meals.into_iter().map(MealWithRestaurant::from).collect(),
        u32::try_from(total).unwrap_or(u32::MAX),
        pagination.page,
        pagination.limit,
    ))
}

pub async fn find_images_by_restaurant_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<String>, Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT image FROM meals WHERE restaurant_id = $1 AND image IS NOT NULL",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch meal images: {}", err);
        Error::UnexpectedError
    })
}

/// Applies a partial update on top of `meal`, the row as currently stored.
pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    meal: &Meal,
    payload: UpdateMealPayload,
) -> Result<Meal, Error> {
    let search_text = search_text(
        payload.name.as_deref().unwrap_or(&meal.name),
        payload.description.as_deref().unwrap_or(&meal.description),
    );

    sqlx::query_as::<_, Meal>(
        "
        UPDATE meals SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            price_cents = COALESCE($3, price_cents),
            is_available = COALESCE($4, is_available),
            search_text = $5,
            updated_at = $6
        WHERE
            id = $7
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.is_available)
    .bind(search_text)
    .bind(Utc::now().naive_utc())
    .bind(&meal.id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update meal: {}", err);
        Error::UnexpectedError
    })
}

/// Overwrites the stored image name, `None` clears it.
pub async fn set_image_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: String,
    image: Option<String>,
) -> Result<(), Error> {
    sqlx::query("UPDATE meals SET image = $1, updated_at = $2 WHERE id = $3")
        .bind(image)
        .bind(Utc::now().naive_utc())
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to set meal image: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM meals WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete meal: {}", err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_folds_unicode() {
        assert_eq!(
            search_text("ÉCLAIR Royale", "Crème pâtissière"),
            "éclair royale\ncrème pâtissière"
        );
    }

    #[test]
    fn price_serializes_with_two_places() {
        assert_eq!(serde_json::to_value(Price::from_cents(1599)).unwrap(), "15.99");
        assert_eq!(serde_json::to_value(Price::from_cents(500)).unwrap(), "5.00");
    }

    #[test]
    fn amounts_convert_to_exact_cents() {
        assert_eq!(Price::from_amount(15.99), Some(Price::from_cents(1599)));
        assert_eq!(Price::from_amount(0.01), Some(Price::from_cents(1)));
        assert_eq!(Price::from_amount(999.99), Some(Price::from_cents(99999)));
    }

    #[test]
    fn amounts_with_three_decimals_are_rejected() {
        assert_eq!(Price::from_amount(1.005), None);
        assert_eq!(Price::from_amount(f64::NAN), None);
    }

    #[test]
    fn bounds_round_inwards() {
        assert_eq!(Price::at_least(10.0).cents(), 1000);
        assert_eq!(Price::at_least(10.001).cents(), 1001);
        assert_eq!(Price::at_most(20.0).cents(), 2000);
        assert_eq!(Price::at_most(19.999).cents(), 1999);
    }
}
