use std::sync::Arc;

use poem_openapi::{auth::Bearer, payload::Json, OpenApi, SecurityScheme, Tags};

use crate::api::log_rejection;
use crate::errors::{AccountError, AuthError};
use crate::services::{AccountService, TokenService};
use crate::types::dto::auth::{
    LoginRequest, LoginResponse, MeResponse, RegisterAccountRequest, RegisterResponse,
    RegisteredAccountView, RegisteredResponse,
};

/// Authentication and self-registration API endpoints
pub struct AuthApi {
    accounts: Arc<AccountService>,
    tokens: Arc<TokenService>,
}

impl AuthApi {
    /// Create a new AuthApi with the given AccountService and TokenService
    pub fn new(accounts: Arc<AccountService>, tokens: Arc<TokenService>) -> Self {
        Self { accounts, tokens }
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi]
impl AuthApi {
    /// Login with email and password to receive a JWT
    ///
    /// Credential failures and status gates all answer 400; unknown email,
    /// missing stored password and wrong password share one message.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        let (token, account) = self
            .accounts
            .authenticate(&body.email, &body.password)
            .await
            .map_err(|e| log_rejection("login", e))?;

        Ok(Json(LoginResponse {
            token,
            user: account.into(),
        }))
    }

    /// Self-service resident registration
    ///
    /// Always creates a Pending resident account awaiting administrator
    /// approval. The response carries no account id and no credentials.
    #[oai(
        path = "/postadminCreateUser",
        method = "post",
        tag = "AuthTags::Authentication"
    )]
    async fn register(
        &self,
        body: Json<RegisterAccountRequest>,
    ) -> Result<RegisteredResponse, AccountError> {
        let account = self
            .accounts
            .register_self(body.0)
            .await
            .map_err(|e| log_rejection("register", e))?;

        Ok(RegisteredResponse::Created(Json(RegisterResponse {
            message: "Registration successful. Your account is pending approval".to_string(),
            user: RegisteredAccountView {
                firstname: account.firstname,
                lastname: account.lastname,
                email: account.email,
                status: account.status,
            },
        })))
    }

    /// Verify the bearer token and return its claims
    #[oai(path = "/me", method = "get", tag = "AuthTags::Authentication")]
    async fn me(&self, auth: BearerAuth) -> Result<Json<MeResponse>, AuthError> {
        let claims = self
            .tokens
            .validate(&auth.0.token)
            .map_err(|e| log_rejection("me", e))?;

        Ok(Json(MeResponse {
            id: claims.sub,
            email: claims.email,
            account_type: claims.account_type,
            expires_at: claims.exp,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};

    use crate::stores::AccountStore;
    use crate::types::db::account::{AccountStatus, AccountType};
    use crate::types::dto::accounts::AdminCreateAccountRequest;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

    async fn setup_test_db() -> (DatabaseConnection, Arc<AccountService>, Arc<TokenService>) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = Arc::new(AccountStore::new(db.clone()));
        let tokens = Arc::new(TokenService::new(TEST_SECRET.to_string()));
        let service = Arc::new(AccountService::new(store, tokens.clone()));

        (db, service, tokens)
    }

    fn admin_request(email: &str, status: Option<AccountStatus>) -> AdminCreateAccountRequest {
        AdminCreateAccountRequest {
            firstname: "Maria".to_string(),
            lastname: "Santos".to_string(),
            middlename: None,
            email: email.to_string(),
            contact: "09171234567".to_string(),
            account_type: AccountType::Resident,
            block: Some("A".to_string()),
            house_id: Some("12".to_string()),
            password: Some("testpass".to_string()),
            status,
        }
    }

    fn register_request(email: &str) -> RegisterAccountRequest {
        RegisterAccountRequest {
            firstname: "Jose".to_string(),
            lastname: "Reyes".to_string(),
            middlename: None,
            email: email.to_string(),
            contact: "09179876543".to_string(),
            password: "newpass".to_string(),
            block: None,
            house_id: None,
        }
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials_returns_token_and_user() {
        let (_db, service, tokens) = setup_test_db().await;
        service
            .create_admin(admin_request("maria@example.com", None))
            .await
            .unwrap();
        let api = AuthApi::new(service, tokens);

        let result = api
            .login(Json(LoginRequest {
                email: "maria@example.com".to_string(),
                password: "testpass".to_string(),
            }))
            .await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "maria@example.com");
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_returns_invalid_credentials() {
        let (_db, service, tokens) = setup_test_db().await;
        let api = AuthApi::new(service, tokens);

        let result = api
            .login(Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "whatever".to_string(),
            }))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_returns_invalid_credentials() {
        let (_db, service, tokens) = setup_test_db().await;
        service
            .create_admin(admin_request("maria@example.com", None))
            .await
            .unwrap();
        let api = AuthApi::new(service, tokens);

        let result = api
            .login(Json(LoginRequest {
                email: "maria@example.com".to_string(),
                password: "wrongpass".to_string(),
            }))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_login_without_stored_password_returns_invalid_credentials() {
        let (_db, service, tokens) = setup_test_db().await;
        let mut request = admin_request("nopass@example.com", None);
        request.password = None;
        service.create_admin(request).await.unwrap();
        let api = AuthApi::new(service, tokens);

        let result = api
            .login(Json(LoginRequest {
                email: "nopass@example.com".to_string(),
                password: "anything".to_string(),
            }))
            .await;

        // Indistinguishable from a wrong password
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_login_with_pending_account_is_rejected() {
        let (_db, service, tokens) = setup_test_db().await;
        service
            .register_self(register_request("pending@example.com"))
            .await
            .unwrap();
        let api = AuthApi::new(service, tokens);

        let result = api
            .login(Json(LoginRequest {
                email: "pending@example.com".to_string(),
                password: "newpass".to_string(),
            }))
            .await;

        match result {
            Err(AuthError::PendingApproval(json)) => {
                assert_eq!(json.0.message, "Your account is pending approval");
            }
            _ => panic!("Expected PendingApproval error"),
        }
    }

    #[tokio::test]
    async fn test_login_with_suspended_account_carries_status_word() {
        let (_db, service, tokens) = setup_test_db().await;
        service
            .create_admin(admin_request(
                "suspended@example.com",
                Some(AccountStatus::Suspended),
            ))
            .await
            .unwrap();
        let api = AuthApi::new(service, tokens);

        let result = api
            .login(Json(LoginRequest {
                email: "suspended@example.com".to_string(),
                password: "testpass".to_string(),
            }))
            .await;

        match result {
            Err(AuthError::AccountDisabled(json)) => {
                assert_eq!(json.0.message, "Your account is suspended");
            }
            _ => panic!("Expected AccountDisabled error"),
        }
    }

    #[tokio::test]
    async fn test_login_with_inactive_account_carries_status_word() {
        let (_db, service, tokens) = setup_test_db().await;
        service
            .create_admin(admin_request(
                "inactive@example.com",
                Some(AccountStatus::Inactive),
            ))
            .await
            .unwrap();
        let api = AuthApi::new(service, tokens);

        let result = api
            .login(Json(LoginRequest {
                email: "inactive@example.com".to_string(),
                password: "testpass".to_string(),
            }))
            .await;

        match result {
            Err(AuthError::AccountDisabled(json)) => {
                assert_eq!(json.0.message, "Your account is inactive");
            }
            _ => panic!("Expected AccountDisabled error"),
        }
    }

    #[tokio::test]
    async fn test_register_creates_pending_resident() {
        let (_db, service, tokens) = setup_test_db().await;
        let api = AuthApi::new(service.clone(), tokens);

        let result = api
            .register(Json(register_request("jose@example.com")))
            .await;

        assert!(result.is_ok());
        let RegisteredResponse::Created(json) = result.unwrap();
        assert_eq!(json.0.user.status, AccountStatus::Pending);
        assert!(json.0.message.contains("pending approval"));

        // Stored record is a resident with placeholder residency
        let stored = service.list().await.unwrap().pop().unwrap();
        assert_eq!(stored.account_type, AccountType::Resident);
        assert_eq!(stored.block.as_deref(), Some("Pending"));
        assert_eq!(stored.house_id.as_deref(), Some("Pending"));
    }

    #[tokio::test]
    async fn test_register_response_has_no_id_or_credentials() {
        let (_db, service, tokens) = setup_test_db().await;
        let api = AuthApi::new(service, tokens);

        let result = api
            .register(Json(register_request("jose@example.com")))
            .await
            .unwrap();

        let RegisteredResponse::Created(json) = result;
        let serialized = serde_json::to_string(&json.0.user).unwrap();
        assert!(!serialized.contains("id"));
        assert!(!serialized.contains("password"));
    }

    #[tokio::test]
    async fn test_register_with_duplicate_email_is_rejected() {
        let (_db, service, tokens) = setup_test_db().await;
        let api = AuthApi::new(service, tokens);

        api.register(Json(register_request("jose@example.com")))
            .await
            .unwrap();
        let result = api
            .register(Json(register_request("jose@example.com")))
            .await;

        assert!(matches!(result, Err(AccountError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_register_without_password_is_rejected() {
        let (_db, service, tokens) = setup_test_db().await;
        let api = AuthApi::new(service, tokens);

        let mut request = register_request("jose@example.com");
        request.password = String::new();
        let result = api.register(Json(request)).await;

        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[tokio::test]
    async fn test_me_with_valid_jwt_returns_claims() {
        let (_db, service, tokens) = setup_test_db().await;
        service
            .create_admin(admin_request("maria@example.com", None))
            .await
            .unwrap();
        let api = AuthApi::new(service, tokens);

        let login = api
            .login(Json(LoginRequest {
                email: "maria@example.com".to_string(),
                password: "testpass".to_string(),
            }))
            .await
            .unwrap();

        let auth = BearerAuth(Bearer {
            token: login.token.clone(),
        });
        let result = api.me(auth).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.id, login.user.id);
        assert_eq!(response.email, "maria@example.com");
        assert_eq!(response.account_type, AccountType::Resident);
        assert!(response.expires_at > chrono::Utc::now().timestamp());
    }

    #[tokio::test]
    async fn test_me_with_invalid_jwt_returns_401() {
        let (_db, service, tokens) = setup_test_db().await;
        let api = AuthApi::new(service, tokens);

        let auth = BearerAuth(Bearer {
            token: "invalid-jwt-token".to_string(),
        });
        let result = api.me(auth).await;

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
