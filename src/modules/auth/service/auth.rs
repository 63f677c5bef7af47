use super::jwt::{self, Claims};
use crate::{
    modules::user::{
        self,
        repository::{Role, User},
    },
    types::Context,
};
use chrono::Duration;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    InvalidToken,
    ExpiredToken,
    Forbidden,
}

type Result<T> = std::result::Result<T, Error>;

pub fn create_access_token(ctx: Arc<Context>, user: &User) -> Result<String> {
    let claims = Claims::new(user, Duration::seconds(ctx.auth.jwt_expires_in));

    jwt::create_token(&claims, &ctx.auth.jwt_secret).map_err(|err| {
        tracing::error!("Failed to sign access token: {}", err);
        Error::UnexpectedError
    })
}

/// Resolves the user behind a bearer token.
pub async fn authenticate(ctx: Arc<Context>, access_token: &str) -> Result<User> {
    let claims = jwt::decode_token(access_token, &ctx.auth.jwt_secret).map_err(|err| {
        tracing::debug!("Rejected access token: {}", err);
        match err {
            jwt::JwtError::Expired => Error::ExpiredToken,
            _ => Error::InvalidToken,
        }
    })?;

    user::repository::find_by_id(&ctx.db_conn.pool, claims.sub)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidToken)
}

pub fn authorize(user: &User, role: Role) -> Result<()> {
    if !user::repository::has_role(user, role) {
        return Err(Error::Forbidden);
    }

    Ok(())
}
