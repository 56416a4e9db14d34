//! File-backed store used when the hosted database is unreachable.
//!
//! Mirrors the browser local-storage fallback: one JSON document per
//! collection in a single directory. Every operation reads the document,
//! applies the change, and writes it back whole.

use crate::desert_storm::Registration;
use crate::player::{PlayerId, PlayerRecord};
use crate::store::{
    PlayerStore, RegistrationStore, ScheduleStore, StoreError, drop_duties_before, merge_duties,
    put_registration, registrations_for, take_registration,
};
use crate::train::TrainDuty;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub const PLAYERS_FILE: &str = "players.json";
pub const TRAIN_DUTY_FILE: &str = "train_duty.json";
pub const DESERT_STORM_FILE: &str = "desert_storm.json";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<T> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} entries from {:?}", items.len(), path);
        Ok(items)
    }

    fn write<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let data = serde_json::to_string_pretty(items)?;
        std::fs::write(&path, &data)?;
        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }
}

impl PlayerStore for LocalStore {
    fn list_players(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        let mut players: Vec<PlayerRecord> = self.read(PLAYERS_FILE)?;
        players.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(players)
    }

    fn get_player(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, StoreError> {
        let players: Vec<PlayerRecord> = self.read(PLAYERS_FILE)?;
        Ok(players.into_iter().find(|p| &p.id == id))
    }

    fn upsert_player(&mut self, record: PlayerRecord) -> Result<(), StoreError> {
        record.validate()?;
        let mut players: Vec<PlayerRecord> = self.read(PLAYERS_FILE)?;
        players.retain(|p| p.id != record.id);
        players.push(record);
        players.sort_by(|a, b| a.id.cmp(&b.id));
        self.write(PLAYERS_FILE, &players)
    }

    fn delete_player(&mut self, id: &PlayerId) -> Result<(), StoreError> {
        let mut players: Vec<PlayerRecord> = self.read(PLAYERS_FILE)?;
        let before = players.len();
        players.retain(|p| &p.id != id);
        if players.len() == before {
            return Err(StoreError::PlayerNotFound(id.clone()));
        }
        self.write(PLAYERS_FILE, &players)
    }
}

impl ScheduleStore for LocalStore {
    fn list_train_duty(&self) -> Result<Vec<TrainDuty>, StoreError> {
        self.read(TRAIN_DUTY_FILE)
    }

    fn save_train_duty(&mut self, duties: &[TrainDuty]) -> Result<(), StoreError> {
        let mut existing: Vec<TrainDuty> = self.read(TRAIN_DUTY_FILE)?;
        merge_duties(&mut existing, duties);
        self.write(TRAIN_DUTY_FILE, &existing)
    }

    fn clear_train_duty_before(&mut self, date: NaiveDate) -> Result<usize, StoreError> {
        let mut existing: Vec<TrainDuty> = self.read(TRAIN_DUTY_FILE)?;
        let removed = drop_duties_before(&mut existing, date);
        if removed > 0 {
            self.write(TRAIN_DUTY_FILE, &existing)?;
        }
        Ok(removed)
    }
}

impl RegistrationStore for LocalStore {
    fn list_registrations(&self, event_date: NaiveDate) -> Result<Vec<Registration>, StoreError> {
        let all: Vec<Registration> = self.read(DESERT_STORM_FILE)?;
        Ok(registrations_for(&all, event_date))
    }

    fn register(&mut self, registration: Registration) -> Result<(), StoreError> {
        let mut all: Vec<Registration> = self.read(DESERT_STORM_FILE)?;
        put_registration(&mut all, registration);
        self.write(DESERT_STORM_FILE, &all)
    }

    fn unregister(&mut self, player: &PlayerId, event_date: NaiveDate) -> Result<(), StoreError> {
        let mut all: Vec<Registration> = self.read(DESERT_STORM_FILE)?;
        take_registration(&mut all, player, event_date)?;
        self.write(DESERT_STORM_FILE, &all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desert_storm::TeamPreference;
    use chrono::{TimeZone, Utc};
    use gun1_core::Level;
    use std::fs;

    /// Create a temporary directory with a unique name for test isolation.
    fn make_test_dir(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gun1_local_store_test_{suffix}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn cleanup(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn empty_directory_reads_as_empty() {
        let dir = make_test_dir("empty");
        let store = LocalStore::new(&dir);
        assert!(store.list_players().unwrap().is_empty());
        assert!(store.list_train_duty().unwrap().is_empty());
        cleanup(&dir);
    }

    #[test]
    fn players_persist_across_instances() {
        let dir = make_test_dir("persist");
        let mut store = LocalStore::new(&dir);
        let mut ana = PlayerRecord::new("a", "Ana");
        ana.progression.t10.hp = Level::new(4);
        store.upsert_player(ana.clone()).unwrap();
        store.upsert_player(PlayerRecord::new("b", "Bo")).unwrap();

        let reopened = LocalStore::new(&dir);
        let players = reopened.list_players().unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0], ana);
        assert!(dir.join(PLAYERS_FILE).exists());

        cleanup(&dir);
    }

    #[test]
    fn delete_rewrites_document() {
        let dir = make_test_dir("delete");
        let mut store = LocalStore::new(&dir);
        store.upsert_player(PlayerRecord::new("a", "Ana")).unwrap();
        store.delete_player(&PlayerId::new("a")).unwrap();
        assert!(store.get_player(&PlayerId::new("a")).unwrap().is_none());
        assert!(matches!(
            store.delete_player(&PlayerId::new("a")),
            Err(StoreError::PlayerNotFound(_))
        ));
        cleanup(&dir);
    }

    #[test]
    fn duty_and_registrations_round_trip() {
        let dir = make_test_dir("duty_regs");
        let mut store = LocalStore::new(&dir);
        let day = NaiveDate::from_ymd_opt(2026, 5, 8).unwrap();

        store
            .save_train_duty(&[TrainDuty {
                date: day,
                player_id: PlayerId::new("a"),
            }])
            .unwrap();
        store
            .register(Registration {
                player_id: PlayerId::new("a"),
                event_date: day,
                team: TeamPreference::Either,
                registered_at: Utc.with_ymd_and_hms(2026, 5, 6, 9, 0, 0).unwrap(),
            })
            .unwrap();

        let mut reopened = LocalStore::new(&dir);
        assert_eq!(reopened.list_train_duty().unwrap().len(), 1);
        assert_eq!(reopened.list_registrations(day).unwrap().len(), 1);
        assert_eq!(
            reopened.clear_train_duty_before(day.succ_opt().unwrap()).unwrap(),
            1
        );

        cleanup(&dir);
    }

    #[test]
    fn corrupt_document_is_a_json_error() {
        let dir = make_test_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PLAYERS_FILE), "{not json").unwrap();

        let store = LocalStore::new(&dir);
        assert!(matches!(store.list_players(), Err(StoreError::Json(_))));

        cleanup(&dir);
    }
}
