//! Remote-first store with a local fallback.
//!
//! Every operation goes to the remote store first. If the remote reports
//! [`StoreError::Unavailable`], the same operation is replayed against the
//! local store and the store is marked offline until the remote answers
//! again. Any other remote error is returned as-is.

use crate::desert_storm::Registration;
use crate::player::{PlayerId, PlayerRecord};
use crate::store::{PlayerStore, RegistrationStore, ScheduleStore, StoreError};
use crate::train::TrainDuty;
use chrono::NaiveDate;
use std::cell::Cell;

#[derive(Debug)]
pub struct FallbackStore<R, L> {
    remote: R,
    local: L,
    offline: Cell<bool>,
}

impl<R, L> FallbackStore<R, L> {
    pub fn new(remote: R, local: L) -> Self {
        Self {
            remote,
            local,
            offline: Cell::new(false),
        }
    }

    /// Whether the most recent operation was served by the local store.
    pub fn is_offline(&self) -> bool {
        self.offline.get()
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn into_parts(self) -> (R, L) {
        (self.remote, self.local)
    }
}

/// Run `remote`, falling back to `local` when the backend is unreachable.
fn route<T>(
    offline: &Cell<bool>,
    op: &str,
    remote: impl FnOnce() -> Result<T, StoreError>,
    local: impl FnOnce() -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    match remote() {
        Ok(value) => {
            if offline.replace(false) {
                log::info!("Remote store reachable again ({op})");
            }
            Ok(value)
        }
        Err(StoreError::Unavailable(reason)) => {
            log::warn!("Remote store unavailable during {op}: {reason}; using local storage");
            offline.set(true);
            local()
        }
        Err(other) => Err(other),
    }
}

impl<R: PlayerStore, L: PlayerStore> PlayerStore for FallbackStore<R, L> {
    fn list_players(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        route(
            &self.offline,
            "list_players",
            || self.remote.list_players(),
            || self.local.list_players(),
        )
    }

    fn get_player(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, StoreError> {
        route(
            &self.offline,
            "get_player",
            || self.remote.get_player(id),
            || self.local.get_player(id),
        )
    }

    fn upsert_player(&mut self, record: PlayerRecord) -> Result<(), StoreError> {
        record.validate()?;
        let Self {
            remote,
            local,
            offline,
        } = self;
        let copy = record.clone();
        route(
            offline,
            "upsert_player",
            || remote.upsert_player(record),
            || local.upsert_player(copy),
        )
    }

    fn delete_player(&mut self, id: &PlayerId) -> Result<(), StoreError> {
        let Self {
            remote,
            local,
            offline,
        } = self;
        route(
            offline,
            "delete_player",
            || remote.delete_player(id),
            || local.delete_player(id),
        )
    }
}

impl<R: ScheduleStore, L: ScheduleStore> ScheduleStore for FallbackStore<R, L> {
    fn list_train_duty(&self) -> Result<Vec<TrainDuty>, StoreError> {
        route(
            &self.offline,
            "list_train_duty",
            || self.remote.list_train_duty(),
            || self.local.list_train_duty(),
        )
    }

    fn save_train_duty(&mut self, duties: &[TrainDuty]) -> Result<(), StoreError> {
        let Self {
            remote,
            local,
            offline,
        } = self;
        route(
            offline,
            "save_train_duty",
            || remote.save_train_duty(duties),
            || local.save_train_duty(duties),
        )
    }

    fn clear_train_duty_before(&mut self, date: NaiveDate) -> Result<usize, StoreError> {
        let Self {
            remote,
            local,
            offline,
        } = self;
        route(
            offline,
            "clear_train_duty_before",
            || remote.clear_train_duty_before(date),
            || local.clear_train_duty_before(date),
        )
    }
}

impl<R: RegistrationStore, L: RegistrationStore> RegistrationStore for FallbackStore<R, L> {
    fn list_registrations(&self, event_date: NaiveDate) -> Result<Vec<Registration>, StoreError> {
        route(
            &self.offline,
            "list_registrations",
            || self.remote.list_registrations(event_date),
            || self.local.list_registrations(event_date),
        )
    }

    fn register(&mut self, registration: Registration) -> Result<(), StoreError> {
        let Self {
            remote,
            local,
            offline,
        } = self;
        let copy = registration.clone();
        route(
            offline,
            "register",
            || remote.register(registration),
            || local.register(copy),
        )
    }

    fn unregister(&mut self, player: &PlayerId, event_date: NaiveDate) -> Result<(), StoreError> {
        let Self {
            remote,
            local,
            offline,
        } = self;
        route(
            offline,
            "unregister",
            || remote.unregister(player, event_date),
            || local.unregister(player, event_date),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    /// A remote that is either down or forwards to an in-memory store.
    #[derive(Debug, Default)]
    struct FlakyRemote {
        down: bool,
        inner: MemoryStore,
    }

    impl FlakyRemote {
        fn check(&self) -> Result<(), StoreError> {
            if self.down {
                Err(StoreError::Unavailable("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl PlayerStore for FlakyRemote {
        fn list_players(&self) -> Result<Vec<PlayerRecord>, StoreError> {
            self.check()?;
            self.inner.list_players()
        }

        fn get_player(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, StoreError> {
            self.check()?;
            self.inner.get_player(id)
        }

        fn upsert_player(&mut self, record: PlayerRecord) -> Result<(), StoreError> {
            self.check()?;
            self.inner.upsert_player(record)
        }

        fn delete_player(&mut self, id: &PlayerId) -> Result<(), StoreError> {
            self.check()?;
            self.inner.delete_player(id)
        }
    }

    impl ScheduleStore for FlakyRemote {
        fn list_train_duty(&self) -> Result<Vec<TrainDuty>, StoreError> {
            self.check()?;
            self.inner.list_train_duty()
        }

        fn save_train_duty(&mut self, duties: &[TrainDuty]) -> Result<(), StoreError> {
            self.check()?;
            self.inner.save_train_duty(duties)
        }

        fn clear_train_duty_before(&mut self, date: NaiveDate) -> Result<usize, StoreError> {
            self.check()?;
            self.inner.clear_train_duty_before(date)
        }
    }

    #[test]
    fn online_writes_go_to_remote_only() {
        let mut store = FallbackStore::new(FlakyRemote::default(), MemoryStore::new());
        store.upsert_player(PlayerRecord::new("a", "Ana")).unwrap();

        assert!(!store.is_offline());
        assert_eq!(store.remote().inner.player_count(), 1);
        assert_eq!(store.local().player_count(), 0);
    }

    #[test]
    fn offline_writes_land_locally() {
        let remote = FlakyRemote {
            down: true,
            ..FlakyRemote::default()
        };
        let mut store = FallbackStore::new(remote, MemoryStore::new());
        store.upsert_player(PlayerRecord::new("a", "Ana")).unwrap();

        assert!(store.is_offline());
        assert_eq!(store.local().player_count(), 1);
        assert_eq!(store.list_players().unwrap().len(), 1);
    }

    #[test]
    fn recovers_when_remote_returns() {
        let remote = FlakyRemote {
            down: true,
            ..FlakyRemote::default()
        };
        let store = FallbackStore::new(remote, MemoryStore::new());
        store.list_players().unwrap();
        assert!(store.is_offline());

        let (mut remote, local) = store.into_parts();
        remote.down = false;
        let store = FallbackStore::new(remote, local);
        store.list_players().unwrap();
        assert!(!store.is_offline());
    }

    #[test]
    fn non_availability_errors_do_not_fall_back() {
        let mut store = FallbackStore::new(FlakyRemote::default(), MemoryStore::new());
        store.local.upsert_player(PlayerRecord::new("a", "Ana")).unwrap();

        let result = store.delete_player(&PlayerId::new("a"));
        assert!(matches!(result, Err(StoreError::PlayerNotFound(_))));
        assert!(!store.is_offline());
        assert_eq!(store.local().player_count(), 1);
    }

    #[test]
    fn invalid_records_never_reach_either_store() {
        let remote = FlakyRemote {
            down: true,
            ..FlakyRemote::default()
        };
        let mut store = FallbackStore::new(remote, MemoryStore::new());
        let result = store.upsert_player(PlayerRecord::new("a", ""));
        assert!(matches!(result, Err(StoreError::InvalidRecord(_))));
        assert_eq!(store.local().player_count(), 0);
    }

    #[test]
    fn schedule_falls_back_too() {
        let remote = FlakyRemote {
            down: true,
            ..FlakyRemote::default()
        };
        let mut store = FallbackStore::new(remote, MemoryStore::new());
        let duty = TrainDuty {
            date: NaiveDate::from_ymd_opt(2026, 5, 8).unwrap(),
            player_id: PlayerId::new("a"),
        };
        store.save_train_duty(std::slice::from_ref(&duty)).unwrap();
        assert_eq!(store.list_train_duty().unwrap(), vec![duty]);
    }
}
