use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    New,
    Contacted,
    Quoted,
    Won,
    Lost,
    Archived,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 6] = [
        QuoteStatus::New,
        QuoteStatus::Contacted,
        QuoteStatus::Quoted,
        QuoteStatus::Won,
        QuoteStatus::Lost,
        QuoteStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::New => "NEW",
            QuoteStatus::Contacted => "CONTACTED",
            QuoteStatus::Quoted => "QUOTED",
            QuoteStatus::Won => "WON",
            QuoteStatus::Lost => "LOST",
            QuoteStatus::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(QuoteStatus::New),
            "CONTACTED" => Ok(QuoteStatus::Contacted),
            "QUOTED" => Ok(QuoteStatus::Quoted),
            "WON" => Ok(QuoteStatus::Won),
            "LOST" => Ok(QuoteStatus::Lost),
            "ARCHIVED" => Ok(QuoteStatus::Archived),
            _ => Err(format!("Invalid quote status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub reference_number: String,
    pub status: QuoteStatus,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gemeente: String,
    pub address: Option<String>,
    pub services: Vec<String>,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub locale: String,
    pub admin_notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct NewQuote {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gemeente: String,
    pub address: Option<String>,
    pub services: Vec<String>,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub locale: String,
    pub created_at: String,
}

impl NewQuote {
    pub fn into_quote(self, reference_number: String) -> Quote {
        Quote {
            id: self.id,
            reference_number,
            status: QuoteStatus::New,
            name: self.name,
            email: self.email,
            phone: self.phone,
            gemeente: self.gemeente,
            address: self.address,
            services: self.services,
            description: self.description,
            budget: self.budget,
            timeline: self.timeline,
            locale: self.locale,
            admin_notes: None,
            created_at: self.created_at.clone(),
            updated_at: self.created_at,
        }
    }
}

/// Public quote-request form
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gemeente: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteRequest {
    pub status: Option<QuoteStatus>,
    pub admin_notes: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct QuoteFilter {
    pub status: Option<QuoteStatus>,
}
