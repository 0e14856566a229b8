use std::fmt;
use thiserror::Error;

const JWT_SECRET_VAR: &str = "JWT_SECRET";
const JWT_SECRET_MIN_LEN: usize = 32;

/// Secret loading failures
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Required secret '{name}' is missing")]
    Missing { name: String },

    #[error("Secret '{name}' must be at least {min} characters, got {actual}")]
    TooShort {
        name: String,
        min: usize,
        actual: usize,
    },
}

/// Server-held secrets.
///
/// There is deliberately no fallback value: startup fails when the token
/// signing secret is absent or too short.
pub struct Secrets {
    jwt_secret: String,
}

impl Secrets {
    /// Load and validate all secrets from the environment
    ///
    /// # Errors
    /// Returns `SecretError` if any required secret is missing or too short
    pub fn init() -> Result<Self, SecretError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SecretError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup(JWT_SECRET_VAR).ok_or_else(|| SecretError::Missing {
            name: JWT_SECRET_VAR.to_string(),
        })?;

        if jwt_secret.len() < JWT_SECRET_MIN_LEN {
            return Err(SecretError::TooShort {
                name: JWT_SECRET_VAR.to_string(),
                min: JWT_SECRET_MIN_LEN,
                actual: jwt_secret.len(),
            });
        }

        Ok(Self { jwt_secret })
    }

    /// Get the JWT signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_fails_fast() {
        let result = Secrets::from_lookup(|_| None);

        assert!(matches!(result, Err(SecretError::Missing { .. })));
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let result = Secrets::from_lookup(|_| Some("too-short".to_string()));

        match result {
            Err(SecretError::TooShort { min, actual, .. }) => {
                assert_eq!(min, 32);
                assert_eq!(actual, 9);
            }
            _ => panic!("Expected TooShort error"),
        }
    }

    #[test]
    fn test_valid_secret_is_accepted() {
        let secrets =
            Secrets::from_lookup(|_| Some("test-secret-key-minimum-32-characters-long".to_string()))
                .unwrap();

        assert_eq!(
            secrets.jwt_secret(),
            "test-secret-key-minimum-32-characters-long"
        );
    }

    #[test]
    fn test_debug_does_not_expose_secret() {
        let secrets =
            Secrets::from_lookup(|_| Some("test-secret-key-minimum-32-characters-long".to_string()))
                .unwrap();

        let debug_output = format!("{:?}", secrets);

        assert!(!debug_output.contains("test-secret-key"));
        assert!(debug_output.contains("<redacted>"));
    }
}
