//! Storage contracts for players, train duty, and Desert Storm registrations.
//!
//! The dashboard talks to a hosted database and falls back to local storage
//! when that backend is unreachable. Each concern is a small trait so the
//! remote client, the local fallback, and the in-memory test double can be
//! swapped freely; [`crate::fallback::FallbackStore`] composes two of them.

use crate::desert_storm::Registration;
use crate::player::{PlayerId, PlayerRecord};
use crate::train::TrainDuty;
use chrono::NaiveDate;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached. Triggers local fallback.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("no registration for player {player} on {event_date}")]
    RegistrationNotFound {
        player: PlayerId,
        event_date: NaiveDate,
    },

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

pub trait PlayerStore {
    /// All players, ordered by id.
    fn list_players(&self) -> Result<Vec<PlayerRecord>, StoreError>;

    fn get_player(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, StoreError>;

    /// Insert or replace a player. The record is validated first.
    fn upsert_player(&mut self, record: PlayerRecord) -> Result<(), StoreError>;

    fn delete_player(&mut self, id: &PlayerId) -> Result<(), StoreError>;
}

pub trait ScheduleStore {
    /// Every stored duty, ordered by date then player.
    fn list_train_duty(&self) -> Result<Vec<TrainDuty>, StoreError>;

    /// Store `duties`, replacing whatever was scheduled on the same dates.
    fn save_train_duty(&mut self, duties: &[TrainDuty]) -> Result<(), StoreError>;

    /// Drop duties dated before `date`. Returns how many were removed.
    fn clear_train_duty_before(&mut self, date: NaiveDate) -> Result<usize, StoreError>;
}

pub trait RegistrationStore {
    /// Registrations for one event, oldest first.
    fn list_registrations(&self, event_date: NaiveDate) -> Result<Vec<Registration>, StoreError>;

    /// Register a player. Re-registering for the same event replaces the
    /// earlier entry.
    fn register(&mut self, registration: Registration) -> Result<(), StoreError>;

    fn unregister(&mut self, player: &PlayerId, event_date: NaiveDate) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Collection helpers shared by the concrete stores
// ---------------------------------------------------------------------------

pub(crate) fn merge_duties(existing: &mut Vec<TrainDuty>, duties: &[TrainDuty]) {
    existing.retain(|d| !duties.iter().any(|n| n.date == d.date));
    existing.extend_from_slice(duties);
    existing.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.player_id.cmp(&b.player_id)));
}

pub(crate) fn drop_duties_before(existing: &mut Vec<TrainDuty>, date: NaiveDate) -> usize {
    let before = existing.len();
    existing.retain(|d| d.date >= date);
    before - existing.len()
}

pub(crate) fn put_registration(existing: &mut Vec<Registration>, registration: Registration) {
    existing.retain(|r| {
        !(r.player_id == registration.player_id && r.event_date == registration.event_date)
    });
    existing.push(registration);
}

pub(crate) fn take_registration(
    existing: &mut Vec<Registration>,
    player: &PlayerId,
    event_date: NaiveDate,
) -> Result<(), StoreError> {
    let before = existing.len();
    existing.retain(|r| !(&r.player_id == player && r.event_date == event_date));
    if existing.len() == before {
        return Err(StoreError::RegistrationNotFound {
            player: player.clone(),
            event_date,
        });
    }
    Ok(())
}

pub(crate) fn registrations_for(existing: &[Registration], event_date: NaiveDate) -> Vec<Registration> {
    let mut out: Vec<Registration> = existing
        .iter()
        .filter(|r| r.event_date == event_date)
        .cloned()
        .collect();
    out.sort_by(|a, b| {
        a.registered_at
            .cmp(&b.registered_at)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    out
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Used in tests and as a scratch store for imports.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    players: BTreeMap<PlayerId, PlayerRecord>,
    duties: Vec<TrainDuty>,
    registrations: Vec<Registration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `players`, validating each.
    pub fn with_players(players: Vec<PlayerRecord>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for player in players {
            store.upsert_player(player)?;
        }
        Ok(store)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl PlayerStore for MemoryStore {
    fn list_players(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        Ok(self.players.values().cloned().collect())
    }

    fn get_player(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, StoreError> {
        Ok(self.players.get(id).cloned())
    }

    fn upsert_player(&mut self, record: PlayerRecord) -> Result<(), StoreError> {
        record.validate()?;
        self.players.insert(record.id.clone(), record);
        Ok(())
    }

    fn delete_player(&mut self, id: &PlayerId) -> Result<(), StoreError> {
        self.players
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::PlayerNotFound(id.clone()))
    }
}

impl ScheduleStore for MemoryStore {
    fn list_train_duty(&self) -> Result<Vec<TrainDuty>, StoreError> {
        Ok(self.duties.clone())
    }

    fn save_train_duty(&mut self, duties: &[TrainDuty]) -> Result<(), StoreError> {
        merge_duties(&mut self.duties, duties);
        Ok(())
    }

    fn clear_train_duty_before(&mut self, date: NaiveDate) -> Result<usize, StoreError> {
        Ok(drop_duties_before(&mut self.duties, date))
    }
}

impl RegistrationStore for MemoryStore {
    fn list_registrations(&self, event_date: NaiveDate) -> Result<Vec<Registration>, StoreError> {
        Ok(registrations_for(&self.registrations, event_date))
    }

    fn register(&mut self, registration: Registration) -> Result<(), StoreError> {
        put_registration(&mut self.registrations, registration);
        Ok(())
    }

    fn unregister(&mut self, player: &PlayerId, event_date: NaiveDate) -> Result<(), StoreError> {
        take_registration(&mut self.registrations, player, event_date)
    }
}
