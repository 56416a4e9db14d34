use crate::store::StoreError;
use chrono::{DateTime, Utc};
use gun1_core::fixed::{Fixed64, completion};
use gun1_core::level::lenient_u64;
use gun1_core::projection::full_unlock_tree_cost;
use gun1_core::{ProgressionState, ProjectionReport, ResourceCost, project_progression};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a player record. Issued by the hosted database.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One alliance member as stored: identity, self-reported power, and the
/// progression levels the cost projection reads.
///
/// Numeric fields are read leniently (see [`gun1_core::level`]), so a row
/// saved from a half-filled form still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_power: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub squad_power: u64,
    #[serde(flatten)]
    pub progression: ProgressionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PlayerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            total_power: 0,
            squad_power: 0,
            progression: ProgressionState::default(),
            updated_at: None,
        }
    }

    /// Reject records the stores must never persist.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.0.trim().is_empty() {
            return Err(StoreError::InvalidRecord("player id is empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(StoreError::InvalidRecord(format!(
                "player {} has no name",
                self.id
            )));
        }
        Ok(())
    }

    pub fn project(&self) -> ProjectionReport {
        project_progression(&self.progression)
    }

    pub fn t10_remaining(&self) -> ResourceCost {
        gun1_core::project_unlock_tree_cost(&self.progression.t10)
    }

    /// Fraction of T10 already paid for.
    pub fn t10_progress(&self) -> Fixed64 {
        completion(self.t10_remaining(), full_unlock_tree_cost())
    }
}
