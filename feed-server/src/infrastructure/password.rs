use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PasswordError {
    #[error("password hash failed: {0}")]
    Hash(String),
}

/// Argon2id with a fresh random salt. The raw password and the resulting
/// hash are never logged.
pub(crate) fn hash_password(raw_password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = hasher()?
        .hash_password(raw_password.as_bytes(), &salt)
        .map_err(|err| PasswordError::Hash(err.to_string()))?;
    Ok(password_hash.to_string())
}

/// Verification goes through the argon2 verifier, never a manual string
/// comparison. Fails closed: a malformed stored hash verifies false.
pub(crate) fn verify_password(raw_password: &str, stored_hash: &str) -> bool {
    let Ok(argon2) = hasher() else {
        return false;
    };
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    argon2
        .verify_password(raw_password.as_bytes(), &parsed_hash)
        .is_ok()
}

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(19 * 1024, 2, 1, None)
        .map_err(|err| PasswordError::Hash(err.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
