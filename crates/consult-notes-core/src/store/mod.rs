//! In-memory consultation store.

mod queries;
mod updates;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use thiserror::Error;

use crate::config::{IdStrategy, StoreConfig};
use crate::models::{ConsultId, Consultation, ConsultationStatus, ConsultationType};

/// Store errors. Only status transitions can fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Consultation not found: {0}")]
    NotFound(ConsultId),

    #[error("Consultation {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: ConsultId,
        from: ConsultationStatus,
        to: ConsultationStatus,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owned collection of consultations, keyed by ID.
#[derive(Debug, Default)]
pub struct ConsultationStore {
    config: StoreConfig,
    consultations: BTreeMap<ConsultId, Consultation>,
    last_issued: ConsultId,
}

impl ConsultationStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Record a new consultation dated now. Returns its ID.
    pub fn create(
        &mut self,
        patient_id: impl Into<String>,
        physician_id: impl Into<String>,
        consult_type: ConsultationType,
        complaint: impl Into<String>,
    ) -> ConsultId {
        self.create_at(patient_id, physician_id, consult_type, complaint, Utc::now())
    }

    /// Record a new consultation with an explicit consult date. Returns its ID.
    pub fn create_at(
        &mut self,
        patient_id: impl Into<String>,
        physician_id: impl Into<String>,
        consult_type: ConsultationType,
        complaint: impl Into<String>,
        consult_date: DateTime<Utc>,
    ) -> ConsultId {
        let id = self.next_id();
        let consultation = Consultation::new(
            id,
            patient_id.into(),
            physician_id.into(),
            consult_type,
            complaint.into(),
            consult_date,
        );

        debug!(
            "event=consult_create id={} type={} strategy={:?}",
            id, consultation.consult_type, self.config.id_strategy
        );

        self.consultations.insert(id, consultation);
        self.last_issued = id;
        id
    }

    /// Get a consultation by ID.
    pub fn get(&self, id: ConsultId) -> Option<&Consultation> {
        self.consultations.get(&id)
    }

    /// Number of consultations held.
    pub fn len(&self) -> usize {
        self.consultations.len()
    }

    /// True when no consultation has been created.
    pub fn is_empty(&self) -> bool {
        self.consultations.is_empty()
    }

    fn next_id(&self) -> ConsultId {
        match self.config.id_strategy {
            IdStrategy::MaxPlusOne => self
                .consultations
                .keys()
                .next_back()
                .map_or(1, |max| max + 1),
            IdStrategy::Counter => self.last_issued + 1,
        }
    }
}
