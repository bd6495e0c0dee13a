use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};

/// Check a requester address and return it trimmed and lowercased.
///
/// Confirmations go out by SMTP, so the domain must carry a TLD on top of
/// what `email_address` accepts.
pub fn validate_and_normalize_email(email: &str) -> ApiResult<String> {
    let candidate = email.trim();

    let has_tld = candidate
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
        .unwrap_or(false);

    if !email_address::EmailAddress::is_valid(candidate) || !has_tld {
        return Err(ApiError::BadRequest(format!(
            "Invalid email address: {}",
            candidate
        )));
    }

    Ok(candidate.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(
            validate_and_normalize_email("  Jan.Peeters@Example.BE ").unwrap(),
            "jan.peeters@example.be"
        );
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for input in ["jan.example.be", "jan@", "jan@example", "jan@example.", ""] {
            assert!(
                validate_and_normalize_email(input).is_err(),
                "{} should be rejected",
                input
            );
        }
    }
}
