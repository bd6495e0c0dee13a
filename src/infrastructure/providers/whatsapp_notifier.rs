use crate::config::WhatsAppConfig;
use crate::domain::ports::notifier::{Audience, Notification, Notifier, NotifyError};
use serde_json::json;
use std::time::Duration;

/// Upper bound for one Cloud API call so a hung endpoint cannot pin the
/// notification task
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Forwards operator notifications to a WhatsApp Cloud API endpoint
pub struct WhatsAppNotifier {
    client: reqwest::Client,
    settings: WhatsAppConfig,
}

impl WhatsAppNotifier {
    pub fn new(settings: WhatsAppConfig) -> Result<Self, NotifyError> {
        Self::with_timeout(settings, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(settings: WhatsAppConfig, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::NotConfigured(format!("WhatsApp HTTP client: {}", e)))?;

        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl Notifier for WhatsAppNotifier {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        // Requesters are only contacted by email
        if notification.audience != Audience::Operator {
            return Ok(());
        }

        let payload = json!({
            "messaging_product": "whatsapp",
            "to": self.settings.operator_number,
            "type": "text",
            "text": { "body": format!("{}\n\n{}", notification.subject, notification.body) },
        });

        self.client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.api_token)
            .json(&payload)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| NotifyError::Delivery(format!("WhatsApp request failed: {}", e)))?;

        tracing::info!("WhatsApp notification sent to operator");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn operator_notice() -> Notification {
        Notification {
            audience: Audience::Operator,
            email: None,
            subject: "Nieuwe afspraak AFR-2026-0001".to_string(),
            body: "Maandag 19/10 om 09:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unresponsive_endpoint_times_out() {
        // Accepts connections but never answers
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let notifier = WhatsAppNotifier::with_timeout(
            WhatsAppConfig {
                api_url: format!("http://{}/messages", addr),
                api_token: "token".to_string(),
                operator_number: "+32470000000".to_string(),
            },
            Duration::from_millis(200),
        )
        .unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), notifier.send(&operator_notice()))
            .await
            .expect("send should give up on its own");

        assert!(matches!(result, Err(NotifyError::Delivery(_))));
    }

    #[tokio::test]
    async fn test_requester_notifications_are_skipped() {
        let notifier = WhatsAppNotifier::new(WhatsAppConfig {
            api_url: "http://127.0.0.1:9/unused".to_string(),
            api_token: "token".to_string(),
            operator_number: "+32470000000".to_string(),
        })
        .unwrap();

        let mut notification = operator_notice();
        notification.audience = Audience::Requester;
        assert!(notifier.send(&notification).await.is_ok());
    }
}
