use std::sync::Arc;

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use crate::errors::InternalError;
use crate::stores::{AccountStore, NotificationStore};
use crate::types::db::notification;

/// Map a raw block value to its display label
pub fn block_label(block: &str) -> String {
    format!("Block {}", block)
}

/// Broadcast fan-out: one notification per distinct occupied block
pub struct NotificationService {
    accounts: Arc<AccountStore>,
    notifications: Arc<NotificationStore>,
}

impl NotificationService {
    pub fn new(accounts: Arc<AccountStore>, notifications: Arc<NotificationStore>) -> Self {
        Self {
            accounts,
            notifications,
        }
    }

    /// Create one notification per distinct resident block
    ///
    /// Blocks still carrying the self-registration placeholder are skipped.
    pub async fn broadcast(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Vec<notification::Model>, InternalError> {
        let blocks = self.accounts.distinct_resident_blocks().await?;
        let now = Utc::now().timestamp();

        let mut created = Vec::with_capacity(blocks.len());
        for block in blocks {
            let model = notification::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                title: Set(title.to_string()),
                message: Set(message.to_string()),
                audience: Set(block_label(&block)),
                created_at: Set(now),
            };
            created.push(self.notifications.insert(model).await?);
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_label_prefixes_block() {
        assert_eq!(block_label("A"), "Block A");
        assert_eq!(block_label("12"), "Block 12");
    }
}
