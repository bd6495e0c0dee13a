use crate::domain::entities::AppointmentStatus;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

/// Validates if an admin status change is allowed
pub fn validate_transition(
    from: AppointmentStatus,
    to: AppointmentStatus,
) -> Result<(), TransitionError> {
    use AppointmentStatus::*;

    match (from, to) {
        // Same state is always valid (no-op)
        (a, b) if a == b => Ok(()),

        (Pending, Confirmed | Rejected | Rescheduled | Cancelled) => Ok(()),
        (Confirmed, Completed | Cancelled | NoShow | Rescheduled) => Ok(()),
        (Rescheduled, Confirmed | Cancelled | Completed | NoShow) => Ok(()),

        // Rejected, Completed, Cancelled and NoShow are terminal
        _ => Err(TransitionError::InvalidTransition { from, to }),
    }
}

/// Whether an appointment in `status` may be moved to another slot
pub fn can_reschedule(status: AppointmentStatus) -> bool {
    matches!(
        status,
        AppointmentStatus::Pending | AppointmentStatus::Confirmed | AppointmentStatus::Rescheduled
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use AppointmentStatus::*;

    #[test]
    fn test_same_state_valid() {
        for status in AppointmentStatus::ALL {
            assert!(validate_transition(status, status).is_ok());
        }
    }

    #[test]
    fn test_pending_transitions() {
        assert!(validate_transition(Pending, Confirmed).is_ok());
        assert!(validate_transition(Pending, Rejected).is_ok());
        assert!(validate_transition(Pending, Cancelled).is_ok());
        assert!(validate_transition(Pending, Completed).is_err());
        assert!(validate_transition(Pending, NoShow).is_err());
    }

    #[test]
    fn test_confirmed_transitions() {
        assert!(validate_transition(Confirmed, Completed).is_ok());
        assert!(validate_transition(Confirmed, NoShow).is_ok());
        assert!(validate_transition(Confirmed, Rescheduled).is_ok());
        assert!(validate_transition(Confirmed, Pending).is_err());
    }

    #[test]
    fn test_terminal_states() {
        for terminal in [Rejected, Completed, Cancelled, NoShow] {
            for target in AppointmentStatus::ALL {
                if target == terminal {
                    continue;
                }
                let result = validate_transition(terminal, target);
                assert_eq!(
                    result,
                    Err(TransitionError::InvalidTransition {
                        from: terminal,
                        to: target
                    })
                );
            }
        }
    }

    #[test]
    fn test_can_reschedule() {
        assert!(can_reschedule(Pending));
        assert!(can_reschedule(Rescheduled));
        assert!(!can_reschedule(Cancelled));
        assert!(!can_reschedule(Completed));
    }
}
