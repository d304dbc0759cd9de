pub mod cancellation;
pub mod models;
pub mod services;
