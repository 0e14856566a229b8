use std::sync::Arc;

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use crate::errors::{AccountError, AuthError, InternalError};
use crate::services::{crypto, TokenService};
use crate::stores::account_store::PENDING_PLACEHOLDER;
use crate::stores::AccountStore;
use crate::types::db::account::{self, AccountStatus, AccountType, CreatedBy};
use crate::types::dto::accounts::{AdminCreateAccountRequest, UpdateAccountRequest};
use crate::types::dto::auth::RegisterAccountRequest;

/// Identity core: account creation, credential verification, status-gated
/// login and record mutation, enforcing the residency-binding rules.
pub struct AccountService {
    accounts: Arc<AccountStore>,
    tokens: Arc<TokenService>,
}

/// Partial-update semantics: an empty string counts as "not supplied".
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn require(value: &str, field: &str) -> Result<(), AccountError> {
    if value.is_empty() {
        return Err(AccountError::validation(format!("{} is required", field)));
    }
    Ok(())
}

fn storage_error(err: InternalError) -> AccountError {
    match err {
        // The unique key caught a write that slipped past the pre-check
        InternalError::UniqueViolation { .. } => AccountError::duplicate_email(),
        other => AccountError::internal(other.to_string()),
    }
}

impl AccountService {
    pub fn new(accounts: Arc<AccountStore>, tokens: Arc<TokenService>) -> Self {
        Self { accounts, tokens }
    }

    /// Admin-initiated account creation
    ///
    /// Residents require a block and house id; guards never store one.
    /// Password is optional - without it the account cannot log in via
    /// password until one is set.
    pub async fn create_admin(
        &self,
        req: AdminCreateAccountRequest,
    ) -> Result<account::Model, AccountError> {
        require(&req.firstname, "firstname")?;
        require(&req.lastname, "lastname")?;
        require(&req.email, "email")?;
        require(&req.contact, "contact")?;

        let (block, house_id) = match req.account_type {
            AccountType::Guard => (None, None),
            AccountType::Resident => {
                let block = supplied(&req.block).ok_or_else(|| {
                    AccountError::validation("block is required for resident accounts")
                })?;
                let house_id = supplied(&req.house_id).ok_or_else(|| {
                    AccountError::validation("houseId is required for resident accounts")
                })?;
                (Some(block.to_string()), Some(house_id.to_string()))
            }
        };

        // Fast-path rejection; the unique key remains the authority
        if self
            .accounts
            .find_by_email(&req.email)
            .await
            .map_err(storage_error)?
            .is_some()
        {
            return Err(AccountError::duplicate_email());
        }

        let password_hash = match supplied(&req.password) {
            Some(password) => Some(crypto::hash_password(password).map_err(storage_error)?),
            None => None,
        };

        let now = Utc::now().timestamp();
        let model = account::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            firstname: Set(req.firstname),
            lastname: Set(req.lastname),
            middlename: Set(supplied(&req.middlename).map(str::to_string)),
            email: Set(req.email),
            contact: Set(req.contact),
            account_type: Set(req.account_type),
            block: Set(block),
            house_id: Set(house_id),
            status: Set(req.status.unwrap_or(AccountStatus::Active)),
            created_by: Set(CreatedBy::Admin),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        self.accounts.insert(model).await.map_err(storage_error)
    }

    /// Self-service registration
    ///
    /// Forces a Pending resident account; password is mandatory. Block and
    /// house id fall back to the "Pending" placeholder until an
    /// administrator corrects them.
    pub async fn register_self(
        &self,
        req: RegisterAccountRequest,
    ) -> Result<account::Model, AccountError> {
        require(&req.firstname, "firstname")?;
        require(&req.lastname, "lastname")?;
        require(&req.email, "email")?;
        require(&req.contact, "contact")?;
        require(&req.password, "password")?;

        if self
            .accounts
            .find_by_email(&req.email)
            .await
            .map_err(storage_error)?
            .is_some()
        {
            return Err(AccountError::duplicate_email());
        }

        let password_hash = crypto::hash_password(&req.password).map_err(storage_error)?;

        let now = Utc::now().timestamp();
        let model = account::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            firstname: Set(req.firstname),
            lastname: Set(req.lastname),
            middlename: Set(supplied(&req.middlename).map(str::to_string)),
            email: Set(req.email),
            contact: Set(req.contact),
            account_type: Set(AccountType::Resident),
            block: Set(Some(
                supplied(&req.block).unwrap_or(PENDING_PLACEHOLDER).to_string(),
            )),
            house_id: Set(Some(
                supplied(&req.house_id)
                    .unwrap_or(PENDING_PLACEHOLDER)
                    .to_string(),
            )),
            status: Set(AccountStatus::Pending),
            created_by: Set(CreatedBy::SelfService),
            password_hash: Set(Some(password_hash)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        self.accounts.insert(model).await.map_err(storage_error)
    }

    /// Verify credentials and gate on account status
    ///
    /// Unknown email, missing stored password and failed comparison all
    /// produce the same rejection so account existence cannot be probed.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, account::Model), AuthError> {
        let found = self
            .accounts
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::internal_error(e.to_string()))?;

        let account = match found {
            Some(account) => account,
            None => return Err(AuthError::invalid_credentials()),
        };

        // Admin-created accounts may have no password yet; password login
        // is simply not available for them
        let stored_hash = match account.password_hash.as_deref() {
            Some(hash) => hash,
            None => return Err(AuthError::invalid_credentials()),
        };

        let verified = crypto::verify_password(password, stored_hash)
            .map_err(|e| AuthError::internal_error(e.to_string()))?;
        if !verified {
            return Err(AuthError::invalid_credentials());
        }

        match account.status {
            AccountStatus::Pending => Err(AuthError::pending_approval()),
            AccountStatus::Inactive | AccountStatus::Suspended => {
                Err(AuthError::account_disabled(account.status.lowercase_word()))
            }
            AccountStatus::Active => {
                let token = self.tokens.issue(&account)?;
                Ok((token, account))
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<account::Model>, AccountError> {
        self.accounts.list().await.map_err(storage_error)
    }

    pub async fn get(&self, id: &str) -> Result<account::Model, AccountError> {
        self.accounts
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(AccountError::not_found)
    }

    /// Partial update
    ///
    /// Only supplied fields change; empty strings are skipped, except for
    /// middlename which accepts explicit clearing. Switching the type to
    /// guard clears the residency binding.
    pub async fn update(
        &self,
        id: &str,
        req: UpdateAccountRequest,
    ) -> Result<account::Model, AccountError> {
        let existing = self.get(id).await?;

        let mut updated: account::ActiveModel = existing.clone().into();

        if let Some(email) = supplied(&req.email) {
            if email != existing.email {
                if self
                    .accounts
                    .email_taken_by_other(email, &existing.id)
                    .await
                    .map_err(storage_error)?
                {
                    return Err(AccountError::duplicate_email());
                }
                updated.email = Set(email.to_string());
            }
        }

        if let Some(firstname) = supplied(&req.firstname) {
            updated.firstname = Set(firstname.to_string());
        }
        if let Some(lastname) = supplied(&req.lastname) {
            updated.lastname = Set(lastname.to_string());
        }
        if let Some(contact) = supplied(&req.contact) {
            updated.contact = Set(contact.to_string());
        }

        // Middlename is the one field where an empty string means "clear"
        if let Some(middlename) = &req.middlename {
            if middlename.is_empty() {
                updated.middlename = Set(None);
            } else {
                updated.middlename = Set(Some(middlename.clone()));
            }
        }

        if let Some(status) = req.status {
            updated.status = Set(status);
        }

        if let Some(password) = supplied(&req.password) {
            let hash = crypto::hash_password(password).map_err(storage_error)?;
            updated.password_hash = Set(Some(hash));
        }

        match req.account_type {
            Some(AccountType::Guard) => {
                updated.account_type = Set(AccountType::Guard);
                // Clear, not merely leave stale
                updated.block = Set(None);
                updated.house_id = Set(None);
            }
            Some(AccountType::Resident) => {
                updated.account_type = Set(AccountType::Resident);
                if let (Some(block), Some(house_id)) =
                    (supplied(&req.block), supplied(&req.house_id))
                {
                    updated.block = Set(Some(block.to_string()));
                    updated.house_id = Set(Some(house_id.to_string()));
                }
            }
            None => {
                if existing.account_type != AccountType::Guard {
                    if let Some(block) = supplied(&req.block) {
                        updated.block = Set(Some(block.to_string()));
                    }
                    if let Some(house_id) = supplied(&req.house_id) {
                        updated.house_id = Set(Some(house_id.to_string()));
                    }
                }
            }
        }

        updated.updated_at = Set(Utc::now().timestamp());

        self.accounts.update(updated).await.map_err(storage_error)
    }

    /// Unconditional, irreversible delete
    pub async fn delete(&self, id: &str) -> Result<(), AccountError> {
        let removed = self.accounts.delete_by_id(id).await.map_err(storage_error)?;

        if !removed {
            return Err(AccountError::not_found());
        }
        Ok(())
    }

    pub async fn list_by_block_and_house(
        &self,
        block: &str,
        house_id: &str,
    ) -> Result<Vec<account::Model>, AccountError> {
        require(block, "block")?;
        require(house_id, "houseId")?;

        self.accounts
            .list_by_block_and_house(block, house_id)
            .await
            .map_err(storage_error)
    }
}
