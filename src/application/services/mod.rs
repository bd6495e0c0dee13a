pub mod admin_auth_service;
pub mod analytics_service;
pub mod appointment_service;
pub mod availability_service;
pub mod content_service;
pub mod export_service;
pub mod notification_service;
pub mod quote_service;
pub mod settings_service;

pub use admin_auth_service::AdminAuthService;
pub use analytics_service::AnalyticsService;
pub use appointment_service::AppointmentService;
pub use availability_service::AvailabilityService;
pub use content_service::ContentService;
pub use export_service::{CsvExport, ExportService, ExportType};
pub use notification_service::NotificationService;
pub use quote_service::QuoteService;
pub use settings_service::SettingsService;
