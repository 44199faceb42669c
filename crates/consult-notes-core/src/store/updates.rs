//! Consultation mutations: assessment updates and status transitions.

use log::debug;

use super::{ConsultationStore, StoreError, StoreResult};
use crate::models::{ConsultId, ConsultationStatus, UpdateOutcome};

impl ConsultationStore {
    /// Record assessment and plan, marking the consultation completed.
    ///
    /// Replaces both fields in full and forces `Completed` from any prior
    /// status. Returns [`UpdateOutcome::NotFound`] for an unknown ID.
    pub fn update(
        &mut self,
        id: ConsultId,
        assessment: impl Into<String>,
        plan: impl Into<String>,
    ) -> UpdateOutcome {
        match self.consultations.get_mut(&id) {
            Some(consultation) => {
                let previous = consultation.status;
                consultation.complete(assessment.into(), plan.into());
                debug!("event=consult_update id={} from={} status=ok", id, previous);
                UpdateOutcome::Updated
            }
            None => {
                debug!("event=consult_update id={} status=not_found", id);
                UpdateOutcome::NotFound
            }
        }
    }

    /// Move a scheduled consultation to `InProgress`.
    pub fn start(&mut self, id: ConsultId) -> StoreResult<ConsultationStatus> {
        self.transition(id, ConsultationStatus::InProgress)
    }

    /// Cancel a consultation that has not been completed.
    pub fn cancel(&mut self, id: ConsultId) -> StoreResult<ConsultationStatus> {
        self.transition(id, ConsultationStatus::Cancelled)
    }

    fn transition(
        &mut self,
        id: ConsultId,
        to: ConsultationStatus,
    ) -> StoreResult<ConsultationStatus> {
        let consultation = self
            .consultations
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;

        let from = consultation.status;
        let allowed = match to {
            ConsultationStatus::InProgress => from.can_start(),
            ConsultationStatus::Cancelled => from.can_cancel(),
            ConsultationStatus::Scheduled | ConsultationStatus::Completed => false,
        };
        if !allowed {
            return Err(StoreError::InvalidTransition { id, from, to });
        }

        consultation.status = to;
        debug!("event=consult_transition id={} from={} to={}", id, from, to);
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConsultationType;

    fn store_with_one() -> (ConsultationStore, ConsultId) {
        let mut store = ConsultationStore::new();
        let id = store.create("P1", "DR1", ConsultationType::Initial, "headache for 3 days");
        (store, id)
    }

    #[test]
    fn test_update_existing() {
        let (mut store, id) = store_with_one();
        let before = store.get(id).unwrap().clone();

        let outcome = store.update(id, "Probably dehydrated", "Drink a lot of water.");
        assert_eq!(outcome, UpdateOutcome::Updated);

        let after = store.get(id).unwrap();
        assert_eq!(after.assessment, "Probably dehydrated");
        assert_eq!(after.plan, "Drink a lot of water.");
        assert_eq!(after.status, ConsultationStatus::Completed);
        assert_eq!(after.id, before.id);
        assert_eq!(after.patient_id, before.patient_id);
        assert_eq!(after.physician_id, before.physician_id);
        assert_eq!(after.consult_type, before.consult_type);
        assert_eq!(after.consult_date, before.consult_date);
        assert_eq!(after.complaint, before.complaint);
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let (mut store, id) = store_with_one();
        let before = store.get(id).unwrap().clone();

        let outcome = store.update(99, "a", "p");
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert!(!outcome.is_updated());
        assert_eq!(store.len(), 1);
        assert!(store.get(99).is_none());
        assert_eq!(store.get(id).unwrap(), &before);
    }

    #[test]
    fn test_update_twice_is_idempotent() {
        let (mut store, id) = store_with_one();
        let _ = store.update(id, "a", "p");
        let once = store.get(id).unwrap().clone();
        let _ = store.update(id, "a", "p");
        assert_eq!(store.get(id).unwrap(), &once);
    }

    #[test]
    fn test_update_resurrects_cancelled() {
        let (mut store, id) = store_with_one();
        store.cancel(id).unwrap();

        assert!(store.update(id, "seen anyway", "none").is_updated());
        assert_eq!(store.get(id).unwrap().status, ConsultationStatus::Completed);
    }

    #[test]
    fn test_start_then_cancel() {
        let (mut store, id) = store_with_one();

        assert_eq!(store.start(id), Ok(ConsultationStatus::InProgress));
        assert_eq!(store.cancel(id), Ok(ConsultationStatus::Cancelled));
        assert_eq!(store.get(id).unwrap().status, ConsultationStatus::Cancelled);
    }

    #[test]
    fn test_start_twice_rejected() {
        let (mut store, id) = store_with_one();
        store.start(id).unwrap();

        let err = store.start(id).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidTransition {
                id,
                from: ConsultationStatus::InProgress,
                to: ConsultationStatus::InProgress,
            }
        );
    }

    #[test]
    fn test_completed_cannot_be_cancelled() {
        let (mut store, id) = store_with_one();
        let _ = store.update(id, "a", "p");

        assert!(matches!(
            store.cancel(id),
            Err(StoreError::InvalidTransition {
                from: ConsultationStatus::Completed,
                ..
            })
        ));
        assert_eq!(store.get(id).unwrap().status, ConsultationStatus::Completed);
    }

    #[test]
    fn test_transition_unknown_id() {
        let mut store = ConsultationStore::new();
        assert_eq!(store.start(3), Err(StoreError::NotFound(3)));
        assert_eq!(store.cancel(3), Err(StoreError::NotFound(3)));
    }

    #[test]
    fn test_transition_keeps_notes_empty() {
        let (mut store, id) = store_with_one();
        store.start(id).unwrap();

        let consult = store.get(id).unwrap();
        assert!(consult.assessment.is_empty());
        assert!(consult.plan.is_empty());
    }
}
