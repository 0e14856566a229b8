// API layer - HTTP endpoints
pub mod accounts;
pub mod auth;
pub mod constructions;
pub mod emergencies;
pub mod health;
pub mod notifications;
pub mod payments;
pub mod reports;
pub mod requests;

use std::fmt;

pub use accounts::AccountsApi;
pub use auth::AuthApi;
pub use constructions::ConstructionsApi;
pub use emergencies::EmergenciesApi;
pub use health::HealthApi;
pub use notifications::NotificationsApi;
pub use payments::PaymentsApi;
pub use reports::ReportsApi;
pub use requests::RequestsApi;

/// Log a rejection at the HTTP boundary before it is returned to the client.
/// Every error response passes through here so failures always leave a trace.
pub(crate) fn log_rejection<E: fmt::Display>(endpoint: &'static str, err: E) -> E {
    tracing::warn!(endpoint, error = %err, "request rejected");
    err
}
