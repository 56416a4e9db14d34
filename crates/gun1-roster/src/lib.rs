//! GUN1 Roster -- alliance data access and the features built on the cost
//! projection: leaderboard, train-duty rotation, and Desert Storm rosters.
//!
//! Storage is split into three small contracts ([`store::PlayerStore`],
//! [`store::ScheduleStore`], [`store::RegistrationStore`]) with an in-memory
//! store, a JSON directory store, and [`fallback::FallbackStore`], which
//! serves from a remote store and drops to a local one while the remote is
//! unreachable.
//!
//! Enable the `parallel` feature to project leaderboard entries with rayon.

pub mod desert_storm;
pub mod fallback;
pub mod leaderboard;
pub mod local;
pub mod player;
pub mod store;
pub mod train;

pub use desert_storm::{EventRoster, Registration, RosterMember, Team, TeamPreference};
pub use fallback::FallbackStore;
pub use leaderboard::{
    DailyIncome, LeaderboardEntry, LeaderboardSettings, SortKey, build_leaderboard,
    days_until_ready,
};
pub use local::LocalStore;
pub use player::{PlayerId, PlayerRecord};
pub use store::{MemoryStore, PlayerStore, RegistrationStore, ScheduleStore, StoreError};
pub use train::{TrainDuty, TrainPolicy, assign_train_duty};
