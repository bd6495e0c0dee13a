use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::domain::entities::DATE_FORMAT;

/// "HH:MM", zero padded, 00:00 to 23:59
pub fn is_valid_slot(value: &str) -> bool {
    static SLOT_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = SLOT_REGEX
        .get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("Invalid slot regex"));

    re.is_match(value)
}

/// "YYYY-MM-DD" naming a real calendar day
pub fn is_valid_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slots() {
        assert!(is_valid_slot("09:00"));
        assert!(is_valid_slot("23:59"));
        assert!(is_valid_slot("00:00"));
    }

    #[test]
    fn test_invalid_slots() {
        assert!(!is_valid_slot("9:00"));
        assert!(!is_valid_slot("24:00"));
        assert!(!is_valid_slot("12:60"));
        assert!(!is_valid_slot("12:00:00"));
        assert!(!is_valid_slot(""));
    }

    #[test]
    fn test_dates() {
        assert!(is_valid_date("2026-10-19"));
        assert!(!is_valid_date("2026-02-30"));
        assert!(!is_valid_date("2026-1-5"));
        assert!(!is_valid_date("19/10/2026"));
    }
}
