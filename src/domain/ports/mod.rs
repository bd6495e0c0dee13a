pub mod analytics_repository;
pub mod appointment_repository;
pub mod availability_repository;
pub mod clock;
pub mod content_repository;
pub mod notifier;
pub mod quote_repository;
pub mod session_repository;
pub mod settings_repository;
pub mod task_spawner;
