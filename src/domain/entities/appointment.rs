use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Rejected,
    Rescheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 7] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Rejected,
        AppointmentStatus::Rescheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Rejected => "REJECTED",
            AppointmentStatus::Rescheduled => "RESCHEDULED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::NoShow => "NO_SHOW",
        }
    }

    /// Whether an appointment in this status still holds its slot
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(AppointmentStatus::Pending),
            "CONFIRMED" => Ok(AppointmentStatus::Confirmed),
            "REJECTED" => Ok(AppointmentStatus::Rejected),
            "RESCHEDULED" => Ok(AppointmentStatus::Rescheduled),
            "COMPLETED" => Ok(AppointmentStatus::Completed),
            "CANCELLED" => Ok(AppointmentStatus::Cancelled),
            "NO_SHOW" => Ok(AppointmentStatus::NoShow),
            _ => Err(format!("Invalid appointment status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub reference_number: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gemeente: String,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub preferred_contact: Option<String>,
    pub locale: String,
    pub admin_notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated booking, ready to be written with a fresh reference number
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gemeente: String,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub preferred_contact: Option<String>,
    pub locale: String,
    pub created_at: String,
}

impl NewAppointment {
    pub fn into_appointment(self, reference_number: String) -> Appointment {
        Appointment {
            id: self.id,
            reference_number,
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
            status: AppointmentStatus::Pending,
            name: self.name,
            email: self.email,
            phone: self.phone,
            gemeente: self.gemeente,
            address: self.address,
            postal_code: self.postal_code,
            project_type: self.project_type,
            description: self.description,
            preferred_contact: self.preferred_contact,
            locale: self.locale,
            admin_notes: None,
            created_at: self.created_at.clone(),
            updated_at: self.created_at,
        }
    }
}

/// Public booking form. Every field is optional here so that missing
/// fields are reported as validation errors instead of rejected JSON.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gemeente: Option<String>,
    pub selected_date: Option<String>,
    pub selected_time: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub preferred_contact: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub status: Option<AppointmentStatus>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub admin_notes: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Response to a successful public submission (appointment or quote)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub reference_number: String,
    pub id: String,
}
