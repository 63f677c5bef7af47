use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::task;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),
    #[error("invalid password hash: {0}")]
    InvalidHash(String),
    #[error("password task failed: {0}")]
    Task(#[from] task::JoinError),
}

fn hash_blocking(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| PasswordError::Hash(err.to_string()))
}

fn verify_blocking(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|err| PasswordError::InvalidHash(err.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(PasswordError::InvalidHash(err.to_string())),
    }
}

/// Runs on the blocking pool.
pub async fn hash(password: String) -> Result<String, PasswordError> {
    task::spawn_blocking(move || hash_blocking(&password)).await?
}

/// `Ok(false)` means the password does not match, errors are reserved for corrupt hashes.
pub async fn verify(password: String, hash: String) -> Result<bool, PasswordError> {
    task::spawn_blocking(move || verify_blocking(&password, &hash)).await?
}
