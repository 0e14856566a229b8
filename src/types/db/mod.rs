// Database entities (sea-orm)
pub mod account;
pub mod construction;
pub mod emergency;
pub mod notification;
pub mod payment;
pub mod report;
pub mod service_request;
