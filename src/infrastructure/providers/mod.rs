pub mod email_notifier;
pub mod log_notifier;
pub mod whatsapp_notifier;

pub use email_notifier::EmailNotifier;
pub use log_notifier::LogNotifier;
pub use whatsapp_notifier::WhatsAppNotifier;
