//! Consultation record and update outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::{ConsultationStatus, ConsultationType};

/// Store-assigned consultation identifier. Always `>= 1`.
pub type ConsultId = u32;

/// A single clinical encounter between a patient and a physician.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    /// Store-assigned ID
    pub id: ConsultId,
    /// Opaque patient identifier (not validated)
    pub patient_id: String,
    /// Opaque physician identifier (not validated)
    pub physician_id: String,
    /// Creation timestamp
    pub consult_date: DateTime<Utc>,
    /// Presenting complaint
    pub complaint: String,
    /// Physician assessment, empty until first update
    pub assessment: String,
    /// Treatment plan, empty until first update
    pub plan: String,
    /// Consultation category
    pub consult_type: ConsultationType,
    /// Lifecycle status
    pub status: ConsultationStatus,
}

impl Consultation {
    /// Create a scheduled consultation with no assessment or plan.
    pub fn new(
        id: ConsultId,
        patient_id: String,
        physician_id: String,
        consult_type: ConsultationType,
        complaint: String,
        consult_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            patient_id,
            physician_id,
            consult_date,
            complaint,
            assessment: String::new(),
            plan: String::new(),
            consult_type,
            status: ConsultationStatus::Scheduled,
        }
    }

    /// Check if the physician has recorded an assessment.
    pub fn has_assessment(&self) -> bool {
        !self.assessment.is_empty()
    }

    /// Replace assessment and plan and mark the consultation completed.
    ///
    /// Applies from any status, `Cancelled` included.
    pub(crate) fn complete(&mut self, assessment: String, plan: String) {
        self.assessment = assessment;
        self.plan = plan;
        self.status = ConsultationStatus::Completed;
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Result of updating a consultation by ID.
///
/// A missing ID is an expected outcome, not an error.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The consultation existed and now holds the new assessment and plan
    Updated,
    /// No consultation has the requested ID
    NotFound,
}

impl UpdateOutcome {
    /// True when a consultation was updated.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

impl From<UpdateOutcome> for bool {
    fn from(outcome: UpdateOutcome) -> Self {
        outcome.is_updated()
    }
}
