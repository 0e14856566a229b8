// API-facing error enums. Each variant maps to the HTTP status of the
// mapped JSON body; internal errors are converted before reaching here.
pub mod accounts;
pub mod auth;
pub mod records;

pub use accounts::AccountError;
pub use auth::AuthError;
pub use records::RecordError;
