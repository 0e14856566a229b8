use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::errors::InternalError;

/// Hash a plaintext password with Argon2id and a fresh random salt
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?
        .to_string();

    Ok(hash)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `Ok(false)` on mismatch; errors only when the stored hash
/// itself cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, InternalError> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|e| InternalError::crypto("parse_password_hash", e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(verify_password("correct horse battery staple", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hash1 = hash_password("samepassword").unwrap();
        let hash2 = hash_password("samepassword").unwrap();

        // Fresh salt every time
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");

        assert!(result.is_err());
    }
}
