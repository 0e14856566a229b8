// Stores layer - Data access, one store per collection
pub mod account_store;
pub mod construction_store;
pub mod emergency_store;
pub mod notification_store;
pub mod payment_store;
pub mod report_store;
pub mod request_store;

pub use account_store::AccountStore;
pub use construction_store::ConstructionStore;
pub use emergency_store::EmergencyStore;
pub use notification_store::NotificationStore;
pub use payment_store::PaymentStore;
pub use report_store::ReportStore;
pub use request_store::RequestStore;
