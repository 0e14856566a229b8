use std::env;

/// Process-level settings loaded from environment variables
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
}

impl Settings {
    /// Load settings from the environment, falling back to local defaults
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://homelink.db?mode=rwc".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            bind_addr: format!("{}:{}", host, port),
        }
    }
}
