use thiserror::Error;

/// Who a notification is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Requester,
    Operator,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub audience: Audience,
    pub email: Option<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notifier not configured: {0}")]
    NotConfigured(String),
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Outbound channel for booking and quote notifications
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Deliver one notification. Channels that do not serve the audience
    /// or lack a recipient return Ok without sending.
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}
