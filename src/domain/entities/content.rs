use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Nl,
    Fr,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Nl => "nl",
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Nl
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nl" => Ok(Locale::Nl),
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Editable text block shown on the public site, one per key and locale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    pub key: String,
    pub locale: Locale,
    pub title: Option<String>,
    pub body: String,
    pub updated_at: String,
}

impl ContentBlock {
    pub fn new(key: String, locale: Locale, title: Option<String>, body: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            key,
            locale,
            title,
            body,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpsertContentRequest {
    pub key: String,
    pub locale: Locale,
    pub title: Option<String>,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentQuery {
    pub locale: Option<Locale>,
}
