//! Human-readable per-year reference numbers such as `AFR-2026-0042`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Appointment,
    Quote,
}

impl ReferenceKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ReferenceKind::Appointment => "AFR",
            ReferenceKind::Quote => "OFF",
        }
    }

    /// Key under which the counter is stored
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Appointment => "appointment",
            ReferenceKind::Quote => "quote",
        }
    }

    /// Leading part shared by every reference of this kind in `year`, e.g. `AFR-2026-`
    pub fn year_prefix(&self, year: i32) -> String {
        format!("{}-{}-", self.prefix(), year)
    }
}

/// Format a reference number, zero-padding the sequence to four digits
pub fn format_reference(kind: ReferenceKind, year: i32, sequence: i64) -> String {
    format!("{}{:04}", kind.year_prefix(year), sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_zero_padded() {
        assert_eq!(
            format_reference(ReferenceKind::Appointment, 2026, 1),
            "AFR-2026-0001"
        );
        assert_eq!(format_reference(ReferenceKind::Quote, 2026, 42), "OFF-2026-0042");
    }

    #[test]
    fn test_padding_grows_past_four_digits() {
        assert_eq!(
            format_reference(ReferenceKind::Quote, 2026, 10000),
            "OFF-2026-10000"
        );
    }

    #[test]
    fn test_year_prefix_matches_stored_references() {
        let prefix = ReferenceKind::Appointment.year_prefix(2027);
        assert_eq!(prefix, "AFR-2027-");
        assert!(!"AFR-2026-0153".starts_with(&prefix));
    }
}
