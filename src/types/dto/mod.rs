// DTO layer - API request/response models
pub mod accounts;
pub mod auth;
pub mod common;
pub mod constructions;
pub mod emergencies;
pub mod notifications;
pub mod payments;
pub mod reports;
pub mod requests;
