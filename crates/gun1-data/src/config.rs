//! Alliance configuration resolved into roster policy types.

use gun1_roster::{DailyIncome, LeaderboardSettings, LocalStore, SortKey, TrainPolicy};
use std::path::{Path, PathBuf};

use crate::loader::{DataLoadError, deserialize_file, find_data_file};
use crate::schema::{AllianceData, DEFAULT_TAG, DEFAULT_TEAM_SIZE, SortData};

/// Base name of the settings file inside a data directory.
pub const ALLIANCE_FILE: &str = "alliance";

/// Settings every roster feature reads, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllianceConfig {
    pub tag: String,
    pub income: DailyIncome,
    pub train: TrainPolicy,
    pub leaderboard: LeaderboardSettings,
    /// Seats per Desert Storm team.
    pub team_size: usize,
    /// Directory for the local fallback store, relative paths resolved
    /// against the data directory.
    pub local_dir: Option<PathBuf>,
}

impl Default for AllianceConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            income: DailyIncome::default(),
            train: TrainPolicy::default(),
            leaderboard: LeaderboardSettings::default(),
            team_size: DEFAULT_TEAM_SIZE,
            local_dir: None,
        }
    }
}

impl AllianceConfig {
    /// Local fallback store, if a directory is configured.
    pub fn local_store(&self) -> Option<LocalStore> {
        self.local_dir.as_ref().map(LocalStore::new)
    }
}

fn invalid(path: &Path, detail: impl Into<String>) -> DataLoadError {
    DataLoadError::Invalid {
        file: path.to_path_buf(),
        detail: detail.into(),
    }
}

fn resolve(data: AllianceData, dir: &Path, path: &Path) -> Result<AllianceConfig, DataLoadError> {
    let tag = data.tag.trim();
    if tag.is_empty() {
        return Err(invalid(path, "tag must not be blank"));
    }
    if data.train.conductors_per_day == 0 {
        return Err(invalid(path, "train.conductors_per_day must be at least 1"));
    }
    if data.desert_storm.team_size == 0 {
        return Err(invalid(path, "desert_storm.team_size must be at least 1"));
    }

    let sort = match data.leaderboard.sort {
        SortData::Power => SortKey::Power,
        SortData::DaysUntilReady => SortKey::DaysUntilReady,
    };

    Ok(AllianceConfig {
        tag: tag.to_string(),
        income: DailyIncome::new(data.income.gold, data.income.valor, data.income.food_iron),
        train: TrainPolicy {
            conductors_per_day: data.train.conductors_per_day,
            cooldown_days: data.train.cooldown_days,
        },
        leaderboard: LeaderboardSettings {
            sort,
            hide_completed: data.leaderboard.hide_completed,
            min_power: data.leaderboard.min_power,
            top_n: data.leaderboard.top_n,
        },
        team_size: data.desert_storm.team_size,
        local_dir: data.storage.local_dir.map(|d| dir.join(d)),
    })
}

/// Load `alliance.{ron,toml,json}` from `dir`.
///
/// A directory without the file yields the defaults.
pub fn load_alliance_config(dir: &Path) -> Result<AllianceConfig, DataLoadError> {
    let Some(path) = find_data_file(dir, ALLIANCE_FILE)? else {
        log::info!("No alliance settings in {:?}, using defaults", dir);
        return Ok(AllianceConfig::default());
    };

    let data: AllianceData = deserialize_file(&path)?;
    let config = resolve(data, dir, &path)?;
    log::info!(
        "Loaded alliance settings for [{}] from {:?}",
        config.tag,
        path
    );
    Ok(config)
}
