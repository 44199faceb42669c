//! Consultation list queries.

use std::cmp::Reverse;

use super::ConsultationStore;
use crate::models::Consultation;

impl ConsultationStore {
    /// Consultations for a physician, most recent first.
    pub fn list_by_physician(&self, physician_id: &str) -> Vec<Consultation> {
        self.list_where(|c| c.physician_id == physician_id)
    }

    /// Consultations for a patient, most recent first.
    pub fn list_by_patient(&self, patient_id: &str) -> Vec<Consultation> {
        self.list_where(|c| c.patient_id == patient_id)
    }

    /// Snapshot of matching consultations sorted by consult date descending.
    /// Equal dates keep ascending ID order.
    fn list_where<F>(&self, predicate: F) -> Vec<Consultation>
    where
        F: Fn(&Consultation) -> bool,
    {
        let mut matches: Vec<Consultation> = self
            .consultations
            .values()
            .filter(|c| predicate(*c))
            .cloned()
            .collect();

        matches.sort_by_key(|c| Reverse(c.consult_date));
        matches
    }
}
