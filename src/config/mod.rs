// Config layer - environment settings, secrets, logging, database bootstrap
pub mod database;
pub mod logging;
pub mod secrets;
pub mod settings;

pub use secrets::{SecretError, Secrets};
pub use settings::Settings;
