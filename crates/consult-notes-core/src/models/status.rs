//! Consultation category and lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a consultation, fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConsultationType {
    /// First visit for a complaint
    Initial,
    /// Revisit of an earlier complaint
    FollowUp,
    /// Same-day, unplanned visit
    Urgent,
    /// Periodic check
    Routine,
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initial => "Initial",
            Self::FollowUp => "FollowUp",
            Self::Urgent => "Urgent",
            Self::Routine => "Routine",
        };
        f.write_str(label)
    }
}

/// Lifecycle stage of a consultation.
///
/// ```text
/// Scheduled ──start──▶ InProgress
///     │                    │
///     ├──────cancel────────┼──────▶ Cancelled
///     │                    │            │
///     └──────────update────┴────────────┴──▶ Completed
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConsultationStatus {
    /// Created, not yet seen
    Scheduled,
    /// Physician has started the consultation
    InProgress,
    /// Assessment and plan recorded
    Completed,
    /// Called off before completion
    Cancelled,
}

impl ConsultationStatus {
    /// Whether `start` may move a consultation out of this status.
    pub fn can_start(&self) -> bool {
        matches!(self, Self::Scheduled)
    }

    /// Whether `cancel` may move a consultation out of this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Scheduled | Self::InProgress)
    }
}

impl fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}
