pub mod config;
pub mod loader;
pub mod schema;

pub use config::{AllianceConfig, load_alliance_config};
pub use loader::{DataLoadError, load_roster, load_roster_from_dir};
