use crate::domain::entities::{Appointment, Locale, Quote};
use crate::domain::ports::notifier::{Audience, Notification, Notifier};
use crate::domain::ports::task_spawner::TaskSpawner;
use crate::infrastructure::observability::NOTIFICATIONS_FAILED;
use std::sync::Arc;

/// Fans notifications out to every configured channel.
///
/// Delivery is best effort: failures are logged and counted, never returned.
#[derive(Clone)]
pub struct NotificationService {
    notifiers: Vec<Arc<dyn Notifier>>,
    spawner: Arc<dyn TaskSpawner>,
    operator_email: Option<String>,
}

impl NotificationService {
    pub fn new(
        notifiers: Vec<Arc<dyn Notifier>>,
        spawner: Arc<dyn TaskSpawner>,
        operator_email: Option<String>,
    ) -> Self {
        Self {
            notifiers,
            spawner,
            operator_email,
        }
    }

    pub fn appointment_booked(&self, appointment: &Appointment) {
        let notifications = vec![
            appointment_confirmation(appointment),
            self.operator_notice(
                format!("Nieuwe afspraak {}", appointment.reference_number),
                format!(
                    "Referentie: {}\nDatum: {} om {}\nNaam: {}\nE-mail: {}\nTelefoon: {}\nGemeente: {}\nProject: {}\nOmschrijving: {}",
                    appointment.reference_number,
                    appointment.appointment_date,
                    appointment.appointment_time,
                    appointment.name,
                    appointment.email,
                    appointment.phone,
                    appointment.gemeente,
                    appointment.project_type.as_deref().unwrap_or("-"),
                    appointment.description.as_deref().unwrap_or("-"),
                ),
            ),
        ];

        self.dispatch_in_background(notifications);
    }

    pub fn quote_received(&self, quote: &Quote) {
        let notifications = vec![
            quote_confirmation(quote),
            self.operator_notice(
                format!("Nieuwe offerteaanvraag {}", quote.reference_number),
                format!(
                    "Referentie: {}\nNaam: {}\nE-mail: {}\nTelefoon: {}\nGemeente: {}\nDiensten: {}\nBudget: {}\nTiming: {}\nOmschrijving: {}",
                    quote.reference_number,
                    quote.name,
                    quote.email,
                    quote.phone,
                    quote.gemeente,
                    quote.services.join(", "),
                    quote.budget.as_deref().unwrap_or("-"),
                    quote.timeline.as_deref().unwrap_or("-"),
                    quote.description,
                ),
            ),
        ];

        self.dispatch_in_background(notifications);
    }

    fn operator_notice(&self, subject: String, body: String) -> Notification {
        Notification {
            audience: Audience::Operator,
            email: self.operator_email.clone(),
            subject,
            body,
        }
    }

    fn dispatch_in_background(&self, notifications: Vec<Notification>) {
        let service = self.clone();
        self.spawner.spawn(Box::pin(async move {
            service.dispatch(&notifications).await;
        }));
    }

    /// Send each notification over each channel independently
    pub async fn dispatch(&self, notifications: &[Notification]) {
        for notification in notifications {
            for notifier in &self.notifiers {
                if let Err(e) = notifier.send(notification).await {
                    metrics::counter!(NOTIFICATIONS_FAILED).increment(1);
                    tracing::warn!(
                        "Notification '{}' via {} failed: {}",
                        notification.subject,
                        notifier.name(),
                        e
                    );
                }
            }
        }
    }
}

fn locale_of(value: &str) -> Locale {
    value.parse().unwrap_or_default()
}

fn appointment_confirmation(appointment: &Appointment) -> Notification {
    let reference = &appointment.reference_number;
    let when = format!(
        "{} {}",
        appointment.appointment_date, appointment.appointment_time
    );

    let (subject, body) = match locale_of(&appointment.locale) {
        Locale::Nl => (
            format!("Bevestiging afspraakaanvraag {}", reference),
            format!(
                "Beste {},\n\nWe hebben uw aanvraag voor een afspraak op {} goed ontvangen.\nUw referentie: {}.\nWe nemen zo snel mogelijk contact met u op om de afspraak te bevestigen.",
                appointment.name, when, reference
            ),
        ),
        Locale::Fr => (
            format!("Confirmation de votre demande de rendez-vous {}", reference),
            format!(
                "Bonjour {},\n\nNous avons bien reçu votre demande de rendez-vous le {}.\nVotre référence : {}.\nNous vous contacterons rapidement pour confirmer.",
                appointment.name, when, reference
            ),
        ),
        Locale::En => (
            format!("Appointment request received {}", reference),
            format!(
                "Dear {},\n\nWe received your appointment request for {}.\nYour reference: {}.\nWe will contact you shortly to confirm.",
                appointment.name, when, reference
            ),
        ),
    };

    Notification {
        audience: Audience::Requester,
        email: Some(appointment.email.clone()),
        subject,
        body,
    }
}

fn quote_confirmation(quote: &Quote) -> Notification {
    let reference = &quote.reference_number;

    let (subject, body) = match locale_of(&quote.locale) {
        Locale::Nl => (
            format!("Bevestiging offerteaanvraag {}", reference),
            format!(
                "Beste {},\n\nBedankt voor uw offerteaanvraag. Uw referentie: {}.\nWe nemen binnen twee werkdagen contact met u op.",
                quote.name, reference
            ),
        ),
        Locale::Fr => (
            format!("Confirmation de votre demande de devis {}", reference),
            format!(
                "Bonjour {},\n\nMerci pour votre demande de devis. Votre référence : {}.\nNous vous contacterons dans les deux jours ouvrables.",
                quote.name, reference
            ),
        ),
        Locale::En => (
            format!("Quote request received {}", reference),
            format!(
                "Dear {},\n\nThank you for your quote request. Your reference: {}.\nWe will get back to you within two working days.",
                quote.name, reference
            ),
        ),
    };

    Notification {
        audience: Audience::Requester,
        email: Some(quote.email.clone()),
        subject,
        body,
    }
}
