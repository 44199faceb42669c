//! Store configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the store picks the next consultation ID.
///
/// Both strategies yield `1, 2, 3, ...` because records are never removed.
/// They would diverge only if deletion existed: `MaxPlusOne` could then
/// reissue the ID of a removed maximum, `Counter` never reissues.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `1` when empty, otherwise the largest existing ID plus one
    #[default]
    MaxPlusOne,
    /// Monotonic counter owned by the store
    Counter,
}

/// Configuration for a [`ConsultationStore`](crate::store::ConsultationStore).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// ID generation strategy
    pub id_strategy: IdStrategy,
}

impl StoreConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style strategy override.
    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }
}
