use crate::domain::entities::{AppointmentFilter, QuoteFilter, DATE_FORMAT};
use crate::domain::ports::analytics_repository::AnalyticsRepository;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::quote_repository::QuoteRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::csv::{join_list, CsvWriter};
use std::sync::Arc;

/// Lower bound matching every stored timestamp
const BEGINNING_OF_TIME: &str = "1970-01-01T00:00:00+00:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportType {
    Quotes,
    Appointments,
    Analytics,
}

impl ExportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportType::Quotes => "quotes",
            ExportType::Appointments => "appointments",
            ExportType::Analytics => "analytics",
        }
    }
}

impl std::str::FromStr for ExportType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quotes" => Ok(ExportType::Quotes),
            "appointments" => Ok(ExportType::Appointments),
            "analytics" => Ok(ExportType::Analytics),
            other => Err(ApiError::BadRequest(format!(
                "Unknown export type '{}', expected quotes, appointments or analytics",
                other
            ))),
        }
    }
}

#[derive(Debug)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

#[derive(Clone)]
pub struct ExportService {
    quote_repo: Arc<dyn QuoteRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
    analytics_repo: Arc<dyn AnalyticsRepository>,
    clock: Arc<dyn Clock>,
}

impl ExportService {
    pub fn new(
        quote_repo: Arc<dyn QuoteRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        analytics_repo: Arc<dyn AnalyticsRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            quote_repo,
            appointment_repo,
            analytics_repo,
            clock,
        }
    }

    pub async fn export(&self, export_type: ExportType) -> ApiResult<CsvExport> {
        let body = match export_type {
            ExportType::Quotes => self.quotes_csv().await?,
            ExportType::Appointments => self.appointments_csv().await?,
            ExportType::Analytics => self.analytics_csv().await?,
        };

        let filename = format!(
            "{}-{}.csv",
            export_type.as_str(),
            self.clock.today().format(DATE_FORMAT)
        );

        Ok(CsvExport { filename, body })
    }

    async fn quotes_csv(&self) -> ApiResult<String> {
        let quotes = self.quote_repo.list_quotes(&QuoteFilter::default()).await?;

        let mut writer = CsvWriter::new(&[
            "referenceNumber",
            "status",
            "createdAt",
            "name",
            "email",
            "phone",
            "gemeente",
            "address",
            "services",
            "budget",
            "timeline",
            "description",
            "locale",
            "adminNotes",
        ]);

        for quote in &quotes {
            writer.write_row([
                quote.reference_number.as_str(),
                quote.status.as_str(),
                quote.created_at.as_str(),
                quote.name.as_str(),
                quote.email.as_str(),
                quote.phone.as_str(),
                quote.gemeente.as_str(),
                quote.address.as_deref().unwrap_or(""),
                join_list(&quote.services).as_str(),
                quote.budget.as_deref().unwrap_or(""),
                quote.timeline.as_deref().unwrap_or(""),
                quote.description.as_str(),
                quote.locale.as_str(),
                quote.admin_notes.as_deref().unwrap_or(""),
            ]);
        }

        Ok(writer.finish())
    }

    async fn appointments_csv(&self) -> ApiResult<String> {
        let appointments = self
            .appointment_repo
            .list_appointments(&AppointmentFilter::default())
            .await?;

        let mut writer = CsvWriter::new(&[
            "referenceNumber",
            "status",
            "appointmentDate",
            "appointmentTime",
            "name",
            "email",
            "phone",
            "gemeente",
            "address",
            "postalCode",
            "projectType",
            "description",
            "preferredContact",
            "locale",
            "adminNotes",
            "createdAt",
        ]);

        for a in &appointments {
            writer.write_row([
                a.reference_number.as_str(),
                a.status.as_str(),
                a.appointment_date.as_str(),
                a.appointment_time.as_str(),
                a.name.as_str(),
                a.email.as_str(),
                a.phone.as_str(),
                a.gemeente.as_str(),
                a.address.as_deref().unwrap_or(""),
                a.postal_code.as_deref().unwrap_or(""),
                a.project_type.as_deref().unwrap_or(""),
                a.description.as_deref().unwrap_or(""),
                a.preferred_contact.as_deref().unwrap_or(""),
                a.locale.as_str(),
                a.admin_notes.as_deref().unwrap_or(""),
                a.created_at.as_str(),
            ]);
        }

        Ok(writer.finish())
    }

    async fn analytics_csv(&self) -> ApiResult<String> {
        let events = self.analytics_repo.list_events_since(BEGINNING_OF_TIME).await?;

        let mut writer = CsvWriter::new(&[
            "createdAt",
            "eventType",
            "path",
            "locale",
            "referrer",
            "sessionId",
        ]);

        for e in &events {
            writer.write_row([
                e.created_at.as_str(),
                e.event_type.as_str(),
                e.path.as_deref().unwrap_or(""),
                e.locale.as_deref().unwrap_or(""),
                e.referrer.as_deref().unwrap_or(""),
                e.session_id.as_deref().unwrap_or(""),
            ]);
        }

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_type_parsing() {
        assert_eq!("quotes".parse::<ExportType>().unwrap(), ExportType::Quotes);
        assert_eq!(
            "appointments".parse::<ExportType>().unwrap(),
            ExportType::Appointments
        );
        assert!(matches!(
            "users".parse::<ExportType>(),
            Err(ApiError::BadRequest(_))
        ));
    }
}
