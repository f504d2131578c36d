pub mod auth;
pub mod handlers;
pub mod request_logger;
