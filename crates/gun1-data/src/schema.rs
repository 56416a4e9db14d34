//! Serde data file structs for alliance settings.
//!
//! These structs define the on-disk format of `alliance.{ron,toml,json}`.
//! Every field is optional; anything left out takes the default below. The
//! loader resolves them into roster policy types in [`crate::config`].

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TAG: &str = "GUN1";

/// Seats per Desert Storm team.
pub const DEFAULT_TEAM_SIZE: usize = 20;

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_conductors() -> u32 {
    1
}

fn default_cooldown() -> u32 {
    7
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

// ===========================================================================
// Top level
// ===========================================================================

/// Alliance settings as written in a data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AllianceData {
    pub tag: String,
    pub income: IncomeData,
    pub train: TrainData,
    pub leaderboard: LeaderboardData,
    pub desert_storm: DesertStormData,
    pub storage: StorageData,
}

impl Default for AllianceData {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            income: IncomeData::default(),
            train: TrainData::default(),
            leaderboard: LeaderboardData::default(),
            desert_storm: DesertStormData::default(),
            storage: StorageData::default(),
        }
    }
}

// ===========================================================================
// Sections
// ===========================================================================

/// Estimated per-day income used for "days until ready".
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct IncomeData {
    pub gold: u64,
    pub valor: u64,
    pub food_iron: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrainData {
    #[serde(default = "default_conductors")]
    pub conductors_per_day: u32,
    #[serde(default = "default_cooldown")]
    pub cooldown_days: u32,
}

impl Default for TrainData {
    fn default() -> Self {
        Self {
            conductors_per_day: default_conductors(),
            cooldown_days: default_cooldown(),
        }
    }
}

/// Leaderboard ordering as spelled in data files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortData {
    #[default]
    Power,
    DaysUntilReady,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LeaderboardData {
    pub sort: SortData,
    pub hide_completed: bool,
    pub min_power: u64,
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DesertStormData {
    #[serde(default = "default_team_size")]
    pub team_size: usize,
}

impl Default for DesertStormData {
    fn default() -> Self {
        Self {
            team_size: default_team_size(),
        }
    }
}

/// Where the local fallback store keeps its JSON documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageData {
    pub local_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_documents_take_defaults() {
        let from_json: AllianceData = serde_json::from_str("{}").unwrap();
        let from_toml: AllianceData = toml::from_str("").unwrap();
        let from_ron: AllianceData = ron::from_str("()").unwrap();

        for data in [from_json, from_toml, from_ron] {
            assert_eq!(data.tag, "GUN1");
            assert_eq!(data.train.conductors_per_day, 1);
            assert_eq!(data.train.cooldown_days, 7);
            assert_eq!(data.desert_storm.team_size, 20);
            assert_eq!(data.leaderboard.sort, SortData::Power);
            assert!(data.storage.local_dir.is_none());
        }
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let data: AllianceData = toml::from_str(
            r#"
[train]
cooldown_days = 3

[leaderboard]
sort = "days_until_ready"
top_n = 10
"#,
        )
        .unwrap();
        assert_eq!(data.train.conductors_per_day, 1);
        assert_eq!(data.train.cooldown_days, 3);
        assert_eq!(data.leaderboard.sort, SortData::DaysUntilReady);
        assert_eq!(data.leaderboard.top_n, Some(10));
        assert!(!data.leaderboard.hide_completed);
    }

    #[test]
    fn ron_sections() {
        let data: AllianceData = ron::from_str(
            r#"(
                tag: "GUN2",
                income: (gold: 5000000, valor: 300, food_iron: 6000000),
                desert_storm: (team_size: 30),
                storage: (local_dir: Some("cache")),
            )"#,
        )
        .unwrap();
        assert_eq!(data.tag, "GUN2");
        assert_eq!(data.income.valor, 300);
        assert_eq!(data.desert_storm.team_size, 30);
        assert_eq!(data.storage.local_dir, Some(PathBuf::from("cache")));
    }
}
