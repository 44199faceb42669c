//! Consult-Notes Core Library
//!
//! In-memory record keeping for clinical consultation notes.
//!
//! # Architecture
//!
//! ```text
//! create ──▶ ┌─────────────────────────────┐
//!            │      ConsultationStore      │
//! update ──▶ │  BTreeMap<ConsultId, ...>   │ ──▶ list_by_physician
//!            │  next id: max + 1 | counter │ ──▶ list_by_patient
//! start  ──▶ └─────────────────────────────┘
//! cancel ──▶
//! ```
//!
//! [`ConsultationStore`] is a plain owned value for single-threaded callers.
//! [`ConsultNotes`] wraps one behind a mutex for callers that share it.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Consultation, ConsultationType, ConsultationStatus)
//! - [`store`]: The in-memory store and its queries
//! - [`config`]: Store configuration (ID strategy)
//! - [`logging`]: Logger bootstrap

pub mod config;
pub mod logging;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, IdStrategy, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use models::{
    ConsultId, Consultation, ConsultationStatus, ConsultationType, UpdateOutcome,
};
pub use store::{ConsultationStore, StoreError};

use std::sync::{Arc, Mutex};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConsultNotesError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for ConsultNotesError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ConsultNotesError::LockPoisoned(e.to_string())
    }
}

// =========================================================================
// Shared API Object
// =========================================================================

/// Thread-safe handle to a consultation store. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct ConsultNotes {
    store: Arc<Mutex<ConsultationStore>>,
}

impl ConsultNotes {
    /// Create a handle over an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle over an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(ConsultationStore::with_config(config))),
        }
    }

    /// Create a handle from a JSON configuration document.
    pub fn from_config_json(json: &str) -> Result<Self, ConsultNotesError> {
        Ok(Self::with_config(StoreConfig::from_json(json)?))
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Create a new consultation. Returns its ID.
    pub fn create_consultation(
        &self,
        patient_id: String,
        physician_id: String,
        consult_type: ConsultationType,
        complaint: String,
    ) -> Result<ConsultId, ConsultNotesError> {
        let mut store = self.store.lock()?;
        Ok(store.create(patient_id, physician_id, consult_type, complaint))
    }

    /// Record assessment and plan for a consultation.
    pub fn update_consultation(
        &self,
        id: ConsultId,
        assessment: String,
        plan: String,
    ) -> Result<UpdateOutcome, ConsultNotesError> {
        let mut store = self.store.lock()?;
        Ok(store.update(id, assessment, plan))
    }

    /// Get a consultation by ID.
    pub fn get_consultation(&self, id: ConsultId) -> Result<Option<Consultation>, ConsultNotesError> {
        let store = self.store.lock()?;
        Ok(store.get(id).cloned())
    }

    // =========================================================================
    // Status Transitions
    // =========================================================================

    /// Move a scheduled consultation to in-progress.
    pub fn start_consultation(&self, id: ConsultId) -> Result<ConsultationStatus, ConsultNotesError> {
        let mut store = self.store.lock()?;
        Ok(store.start(id)?)
    }

    /// Cancel a consultation that has not been completed.
    pub fn cancel_consultation(&self, id: ConsultId) -> Result<ConsultationStatus, ConsultNotesError> {
        let mut store = self.store.lock()?;
        Ok(store.cancel(id)?)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Consultations for a physician, most recent first.
    pub fn physician_consultations(
        &self,
        physician_id: &str,
    ) -> Result<Vec<Consultation>, ConsultNotesError> {
        let store = self.store.lock()?;
        Ok(store.list_by_physician(physician_id))
    }

    /// Consultations for a patient, most recent first.
    pub fn patient_consultations(
        &self,
        patient_id: &str,
    ) -> Result<Vec<Consultation>, ConsultNotesError> {
        let store = self.store.lock()?;
        Ok(store.list_by_patient(patient_id))
    }

    /// Number of consultations held.
    pub fn consultation_count(&self) -> Result<usize, ConsultNotesError> {
        let store = self.store.lock()?;
        Ok(store.len())
    }
}
