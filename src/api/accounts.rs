use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::log_rejection;
use crate::errors::AccountError;
use crate::services::AccountService;
use crate::types::dto::accounts::{
    AccountView, AdminCreateAccountRequest, CreatedAccountResponse, DeleteAccountResponse,
    UpdateAccountRequest,
};

/// Account management API endpoints
pub struct AccountsApi {
    accounts: Arc<AccountService>,
}

impl AccountsApi {
    /// Create a new AccountsApi with the given AccountService
    pub fn new(accounts: Arc<AccountService>) -> Self {
        Self { accounts }
    }
}

/// API tags for account endpoints
#[derive(Tags)]
enum AccountTags {
    /// Account management endpoints
    Accounts,
}

#[OpenApi]
impl AccountsApi {
    /// Admin-initiated account creation
    ///
    /// Residents require block and houseId; guards never store them.
    /// Status defaults to Active unless overridden.
    #[oai(
        path = "/adminCreateUser",
        method = "post",
        tag = "AccountTags::Accounts"
    )]
    async fn create(
        &self,
        body: Json<AdminCreateAccountRequest>,
    ) -> Result<CreatedAccountResponse, AccountError> {
        let account = self
            .accounts
            .create_admin(body.0)
            .await
            .map_err(|e| log_rejection("admin_create_account", e))?;

        Ok(CreatedAccountResponse::Created(Json(account.into())))
    }

    /// List every account
    #[oai(path = "/users", method = "get", tag = "AccountTags::Accounts")]
    async fn list(&self) -> Result<Json<Vec<AccountView>>, AccountError> {
        let accounts = self
            .accounts
            .list()
            .await
            .map_err(|e| log_rejection("list_accounts", e))?;

        Ok(Json(accounts.into_iter().map(Into::into).collect()))
    }

    /// Fetch one account by id
    #[oai(path = "/users/:id", method = "get", tag = "AccountTags::Accounts")]
    async fn get(&self, id: Path<String>) -> Result<Json<AccountView>, AccountError> {
        let account = self
            .accounts
            .get(&id.0)
            .await
            .map_err(|e| log_rejection("get_account", e))?;

        Ok(Json(account.into()))
    }

    /// Partial account update
    ///
    /// Omitted and empty fields are untouched, except middlename where an
    /// empty string clears the value.
    #[oai(path = "/users/:id", method = "put", tag = "AccountTags::Accounts")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateAccountRequest>,
    ) -> Result<Json<AccountView>, AccountError> {
        let account = self
            .accounts
            .update(&id.0, body.0)
            .await
            .map_err(|e| log_rejection("update_account", e))?;

        Ok(Json(account.into()))
    }

    /// Delete an account
    #[oai(path = "/users/:id", method = "delete", tag = "AccountTags::Accounts")]
    async fn delete(&self, id: Path<String>) -> Result<Json<DeleteAccountResponse>, AccountError> {
        self.accounts
            .delete(&id.0)
            .await
            .map_err(|e| log_rejection("delete_account", e))?;

        Ok(Json(DeleteAccountResponse {
            message: "Account deleted successfully".to_string(),
        }))
    }

    /// List accounts living at a given block and house
    #[oai(
        path = "/users/block/:block/house/:house_id",
        method = "get",
        tag = "AccountTags::Accounts"
    )]
    async fn list_by_block_and_house(
        &self,
        block: Path<String>,
        house_id: Path<String>,
    ) -> Result<Json<Vec<AccountView>>, AccountError> {
        let accounts = self
            .accounts
            .list_by_block_and_house(&block.0, &house_id.0)
            .await
            .map_err(|e| log_rejection("list_accounts_by_block_and_house", e))?;

        Ok(Json(accounts.into_iter().map(Into::into).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    use crate::services::TokenService;
    use crate::stores::AccountStore;
    use crate::types::db::account::{AccountStatus, AccountType, CreatedBy};

    async fn setup_api() -> AccountsApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = Arc::new(AccountStore::new(db));
        let tokens = Arc::new(TokenService::new(
            "test-secret-key-minimum-32-characters-long".to_string(),
        ));
        AccountsApi::new(Arc::new(AccountService::new(store, tokens)))
    }

    fn resident_request(email: &str) -> AdminCreateAccountRequest {
        AdminCreateAccountRequest {
            firstname: "Maria".to_string(),
            lastname: "Santos".to_string(),
            middlename: Some("Lopez".to_string()),
            email: email.to_string(),
            contact: "09171234567".to_string(),
            account_type: AccountType::Resident,
            block: Some("A".to_string()),
            house_id: Some("12".to_string()),
            password: None,
            status: None,
        }
    }

    fn guard_request(email: &str) -> AdminCreateAccountRequest {
        AdminCreateAccountRequest {
            firstname: "Pedro".to_string(),
            lastname: "Cruz".to_string(),
            middlename: None,
            email: email.to_string(),
            contact: "09170001111".to_string(),
            account_type: AccountType::Guard,
            block: None,
            house_id: None,
            password: None,
            status: None,
        }
    }

    async fn created_view(api: &AccountsApi, req: AdminCreateAccountRequest) -> AccountView {
        let CreatedAccountResponse::Created(json) = api.create(Json(req)).await.unwrap();
        json.0
    }

    #[tokio::test]
    async fn test_create_resident_defaults_to_active() {
        let api = setup_api().await;

        let view = created_view(&api, resident_request("maria@example.com")).await;

        assert_eq!(view.status, AccountStatus::Active);
        assert_eq!(view.created_by, CreatedBy::Admin);
        assert_eq!(view.block.as_deref(), Some("A"));
        assert_eq!(view.house_id.as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn test_create_guard_without_residency_succeeds() {
        let api = setup_api().await;

        let view = created_view(&api, guard_request("pedro@example.com")).await;

        assert_eq!(view.account_type, AccountType::Guard);
        assert!(view.block.is_none());
        assert!(view.house_id.is_none());
    }

    #[tokio::test]
    async fn test_create_resident_without_block_is_rejected() {
        let api = setup_api().await;

        let mut request = resident_request("maria@example.com");
        request.block = None;
        let result = api.create(Json(request)).await;

        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_guard_ignores_supplied_residency() {
        let api = setup_api().await;

        let mut request = guard_request("pedro@example.com");
        request.block = Some("B".to_string());
        request.house_id = Some("7".to_string());
        let view = created_view(&api, request).await;

        assert!(view.block.is_none());
        assert!(view.house_id.is_none());
    }

    #[tokio::test]
    async fn test_create_with_duplicate_email_is_rejected() {
        let api = setup_api().await;

        created_view(&api, resident_request("maria@example.com")).await;
        let result = api.create(Json(resident_request("maria@example.com"))).await;

        assert!(matches!(result, Err(AccountError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_account_view_never_carries_password_hash() {
        let api = setup_api().await;

        let mut request = resident_request("maria@example.com");
        request.password = Some("secretpass".to_string());
        let view = created_view(&api, request).await;

        let serialized = serde_json::to_string(&view).unwrap();
        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("argon2"));
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_not_found() {
        let api = setup_api().await;

        let result = api.get(Path("no-such-id".to_string())).await;

        assert!(matches!(result, Err(AccountError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_skips_empty_strings() {
        let api = setup_api().await;
        let view = created_view(&api, resident_request("maria@example.com")).await;

        let result = api
            .update(
                Path(view.id.clone()),
                Json(UpdateAccountRequest {
                    firstname: Some(String::new()),
                    contact: Some("09998887777".to_string()),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();

        // Empty firstname left untouched, contact applied
        assert_eq!(result.firstname, "Maria");
        assert_eq!(result.contact, "09998887777");
    }

    #[tokio::test]
    async fn test_update_empty_middlename_clears_it() {
        let api = setup_api().await;
        let view = created_view(&api, resident_request("maria@example.com")).await;
        assert_eq!(view.middlename.as_deref(), Some("Lopez"));

        let result = api
            .update(
                Path(view.id.clone()),
                Json(UpdateAccountRequest {
                    middlename: Some(String::new()),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();

        assert!(result.middlename.is_none());
    }

    #[tokio::test]
    async fn test_update_to_guard_clears_residency() {
        let api = setup_api().await;
        let view = created_view(&api, resident_request("maria@example.com")).await;

        let result = api
            .update(
                Path(view.id.clone()),
                Json(UpdateAccountRequest {
                    account_type: Some(AccountType::Guard),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();

        assert_eq!(result.account_type, AccountType::Guard);
        assert!(result.block.is_none());
        assert!(result.house_id.is_none());
    }

    #[tokio::test]
    async fn test_update_to_resident_requires_both_residency_fields() {
        let api = setup_api().await;
        let view = created_view(&api, guard_request("pedro@example.com")).await;

        // Only block supplied; residency stays unset
        let result = api
            .update(
                Path(view.id.clone()),
                Json(UpdateAccountRequest {
                    account_type: Some(AccountType::Resident),
                    block: Some("B".to_string()),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();

        assert_eq!(result.account_type, AccountType::Resident);
        assert!(result.block.is_none());
        assert!(result.house_id.is_none());

        // Both supplied; residency set
        let result = api
            .update(
                Path(view.id.clone()),
                Json(UpdateAccountRequest {
                    block: Some("B".to_string()),
                    house_id: Some("7".to_string()),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();

        assert_eq!(result.block.as_deref(), Some("B"));
        assert_eq!(result.house_id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn test_update_email_to_taken_address_is_rejected() {
        let api = setup_api().await;
        created_view(&api, resident_request("maria@example.com")).await;
        let other = created_view(&api, guard_request("pedro@example.com")).await;

        let result = api
            .update(
                Path(other.id.clone()),
                Json(UpdateAccountRequest {
                    email: Some("maria@example.com".to_string()),
                    ..Default::default()
                }),
            )
            .await;

        assert!(matches!(result, Err(AccountError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_update_keeping_own_email_succeeds() {
        let api = setup_api().await;
        let view = created_view(&api, resident_request("maria@example.com")).await;

        let result = api
            .update(
                Path(view.id.clone()),
                Json(UpdateAccountRequest {
                    email: Some("maria@example.com".to_string()),
                    lastname: Some("Garcia".to_string()),
                    ..Default::default()
                }),
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().lastname, "Garcia");
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_not_found() {
        let api = setup_api().await;
        let view = created_view(&api, resident_request("maria@example.com")).await;

        let deleted = api.delete(Path(view.id.clone())).await;
        assert!(deleted.is_ok());

        let result = api.get(Path(view.id)).await;
        assert!(matches!(result, Err(AccountError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_not_found() {
        let api = setup_api().await;

        let result = api.delete(Path("no-such-id".to_string())).await;

        assert!(matches!(result, Err(AccountError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_block_and_house_filters() {
        let api = setup_api().await;
        created_view(&api, resident_request("maria@example.com")).await;

        let mut other = resident_request("ana@example.com");
        other.block = Some("B".to_string());
        created_view(&api, other).await;

        let result = api
            .list_by_block_and_house(Path("A".to_string()), Path("12".to_string()))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.0[0].email, "maria@example.com");
    }

    #[tokio::test]
    async fn test_list_by_block_and_house_rejects_empty_segment() {
        let api = setup_api().await;

        let result = api
            .list_by_block_and_house(Path(String::new()), Path("12".to_string()))
            .await;

        assert!(matches!(result, Err(AccountError::Validation(_))));
    }
}
