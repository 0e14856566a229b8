use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::errors::AuthError;
use crate::types::db::account;
use crate::types::internal::auth::Claims;

/// Manages JWT token generation and validation
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_hours: i64,
}

impl TokenService {
    /// Create a new TokenService with the given JWT secret
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_hours: 24,
        }
    }

    /// Generate a JWT for the given account
    ///
    /// Claims carry the account id, email and type.
    pub fn issue(&self, account: &account::Model) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let expiration = now + (self.jwt_expiration_hours * 60 * 60);

        let claims = Claims {
            sub: account.id.clone(),
            email: account.email.clone(),
            account_type: account.account_type,
            exp: expiration,
            iat: now,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::internal_error(format!("Failed to generate JWT: {}", e)))?;

        Ok(token)
    }

    /// Validate a JWT and return the claims
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            if e.to_string().contains("ExpiredSignature") {
                AuthError::expired_token()
            } else {
                AuthError::invalid_token()
            }
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .finish()
    }
}
