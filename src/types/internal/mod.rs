// Internal (non-API) types
pub mod auth;
