// Services layer - Business logic
pub mod account_service;
pub mod crypto;
pub mod notification_service;
pub mod token_service;

pub use account_service::AccountService;
pub use notification_service::NotificationService;
pub use token_service::TokenService;
