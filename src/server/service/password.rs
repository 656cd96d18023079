//! Argon2 credential hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::{internal::InternalError, AppError};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr)` - Stored hash is malformed
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Rejects passwords shorter than [`MIN_PASSWORD_LENGTH`].
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}
