use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Secrets;
use crate::stores::{
    AccountStore, ConstructionStore, EmergencyStore, NotificationStore, PaymentStore, ReportStore,
    RequestStore,
};

/// Centralized application data following the main-owned stores pattern
///
/// All stores are created once in main.rs and shared across the API
/// structs, so each collection has exactly one store instance.
pub struct AppData {
    pub db: DatabaseConnection,
    pub secrets: Secrets,
    pub account_store: Arc<AccountStore>,
    pub payment_store: Arc<PaymentStore>,
    pub report_store: Arc<ReportStore>,
    pub emergency_store: Arc<EmergencyStore>,
    pub request_store: Arc<RequestStore>,
    pub construction_store: Arc<ConstructionStore>,
    pub notification_store: Arc<NotificationStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be established and migrated before
    /// calling this.
    pub fn init(db: DatabaseConnection, secrets: Secrets) -> Self {
        tracing::debug!("Creating stores...");

        let account_store = Arc::new(AccountStore::new(db.clone()));
        let payment_store = Arc::new(PaymentStore::new(db.clone()));
        let report_store = Arc::new(ReportStore::new(db.clone()));
        let emergency_store = Arc::new(EmergencyStore::new(db.clone()));
        let request_store = Arc::new(RequestStore::new(db.clone()));
        let construction_store = Arc::new(ConstructionStore::new(db.clone()));
        let notification_store = Arc::new(NotificationStore::new(db.clone()));

        tracing::debug!("Stores created");

        Self {
            db,
            secrets,
            account_store,
            payment_store,
            report_store,
            emergency_store,
            request_store,
            construction_store,
            notification_store,
        }
    }
}
