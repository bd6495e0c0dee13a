use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};

/// Collects the trimmed value of required form fields and reports every
/// missing one in a single 400
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self, name: &'static str, value: Option<&str>) -> String {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.to_string(),
            None => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    pub fn finish(self) -> ApiResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::BadRequest(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            )))
        }
    }
}

/// Trimmed optional text; blank becomes None
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
