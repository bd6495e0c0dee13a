pub mod appointments;
pub mod auth;
pub mod availability;
pub mod content;
pub mod quotes;
pub mod reporting;
pub mod settings;
