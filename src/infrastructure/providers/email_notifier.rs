use crate::config::SmtpConfig;
use crate::domain::ports::notifier::{Notification, Notifier, NotifyError};
use lettre::{
    message::{header::ContentType, Mailbox}, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message as LettreMessage, Tokio1Executor,
};

/// Sends plain-text notification emails over SMTP
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl EmailNotifier {
    pub fn new(settings: &SmtpConfig) -> Result<Self, NotifyError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| NotifyError::NotConfigured(format!("SMTP relay {}: {}", settings.host, e)))?
            .port(settings.port);

        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: settings.from.clone(),
        })
    }

    fn build_message(&self, to: &str, notification: &Notification) -> Result<LettreMessage, NotifyError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| NotifyError::NotConfigured(format!("Invalid sender {}: {}", self.from, e)))?;
        let to: Mailbox = to
            .parse()
            .map_err(|e| NotifyError::Delivery(format!("Invalid recipient {}: {}", to, e)))?;

        LettreMessage::builder()
            .from(from)
            .to(to)
            .subject(notification.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| NotifyError::Delivery(format!("Failed to build email: {}", e)))
    }
}

#[async_trait::async_trait]
impl Notifier for EmailNotifier {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let Some(to) = notification.email.as_deref() else {
            tracing::debug!("No email recipient for {:?} notification, skipping", notification.audience);
            return Ok(());
        };

        let message = self.build_message(to, notification)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Delivery(format!("SMTP send to {} failed: {}", to, e)))?;

        tracing::info!("Email notification sent to {}", to);
        Ok(())
    }
}
