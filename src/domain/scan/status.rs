//! ScanStatus enum for tracking the lifecycle of a scan session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of a scan session.
///
/// Whether the pipeline is running is tracked separately; it toggles with
/// visibility while the session is `Scanning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    #[default]
    Idle,
    AwaitingAuthorization,
    /// Capture is configured and codes are accepted.
    Scanning,
    /// A code was forwarded.
    Completed,
    /// The user refused access when prompted.
    Inactive,
    Failed,
}

impl ScanStatus {
    /// Returns true if the pipeline may run in this phase.
    pub fn is_scanning(&self) -> bool {
        matches!(self, ScanStatus::Scanning)
    }
}

impl StateMachine for ScanStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ScanStatus::*;
        matches!(
            (self, target),
            (Idle, AwaitingAuthorization)
                | (Idle, Scanning)
                | (Idle, Failed)
                | (AwaitingAuthorization, Scanning)
                | (AwaitingAuthorization, Inactive)
                | (AwaitingAuthorization, Failed)
                | (Scanning, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ScanStatus::*;
        match self {
            Idle => vec![AwaitingAuthorization, Scanning, Failed],
            AwaitingAuthorization => vec![Scanning, Inactive, Failed],
            Scanning => vec![Completed],
            Completed | Inactive | Failed => vec![],
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanStatus::Idle => "Idle",
            ScanStatus::AwaitingAuthorization => "AwaitingAuthorization",
            ScanStatus::Scanning => "Scanning",
            ScanStatus::Completed => "Completed",
            ScanStatus::Inactive => "Inactive",
            ScanStatus::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ScanStatus; 6] = [
        ScanStatus::Idle,
        ScanStatus::AwaitingAuthorization,
        ScanStatus::Scanning,
        ScanStatus::Completed,
        ScanStatus::Inactive,
        ScanStatus::Failed,
    ];

    #[test]
    fn default_is_idle() {
        assert_eq!(ScanStatus::default(), ScanStatus::Idle);
    }

    #[test]
    fn only_scanning_is_scanning() {
        for status in ALL {
            assert_eq!(status.is_scanning(), status == ScanStatus::Scanning);
        }
    }

    #[test]
    fn completed_inactive_and_failed_are_terminal() {
        assert!(ScanStatus::Completed.is_terminal());
        assert!(ScanStatus::Inactive.is_terminal());
        assert!(ScanStatus::Failed.is_terminal());
        assert!(!ScanStatus::Scanning.is_terminal());
    }

    #[test]
    fn scanning_cannot_fail_after_configuration() {
        assert!(ScanStatus::Scanning.transition_to(ScanStatus::Failed).is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ScanStatus::AwaitingAuthorization).unwrap(),
            "\"awaiting_authorization\""
        );
    }
}
