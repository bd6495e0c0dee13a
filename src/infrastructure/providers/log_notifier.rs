use crate::domain::ports::notifier::{Notification, Notifier, NotifyError};

/// Fallback used when no delivery channel is configured
#[derive(Clone, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::info!(
            audience = ?notification.audience,
            email = ?notification.email,
            "Notification (not delivered): {}",
            notification.subject
        );
        Ok(())
    }
}
