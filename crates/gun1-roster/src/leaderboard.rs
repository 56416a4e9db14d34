//! Alliance leaderboard built on top of the cost projection.

use crate::player::{PlayerId, PlayerRecord};
use gun1_core::fixed::{Fixed64, completion};
use gun1_core::projection::full_unlock_tree_cost;
use gun1_core::{ProjectionReport, ResourceCost};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Estimated resources a player gathers per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyIncome {
    pub gold: u64,
    pub valor: u64,
    pub food_iron: u64,
}

impl DailyIncome {
    pub const fn new(gold: u64, valor: u64, food_iron: u64) -> Self {
        Self {
            gold,
            valor,
            food_iron,
        }
    }
}

fn days_for(remaining: u64, per_day: u64) -> Option<u64> {
    match (remaining, per_day) {
        (0, _) => Some(0),
        (_, 0) => None,
        (r, d) => Some(r.div_ceil(d)),
    }
}

/// Days of income needed to cover `remaining`.
///
/// The slowest resource decides. Returns `None` when something is still owed
/// in a resource with no income at all.
pub fn days_until_ready(remaining: ResourceCost, income: &DailyIncome) -> Option<u32> {
    let days = days_for(remaining.gold, income.gold)?
        .max(days_for(remaining.valor, income.valor)?)
        .max(days_for(remaining.food_iron, income.food_iron)?);
    Some(u32::try_from(days).unwrap_or(u32::MAX))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Power,
    DaysUntilReady,
}

/// Admin-controlled visibility settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardSettings {
    pub sort: SortKey,
    /// Leave out players whose T10 is already complete.
    pub hide_completed: bool,
    pub min_power: u64,
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position after sorting and filtering.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub total_power: u64,
    pub report: ProjectionReport,
    pub t10_remaining: ResourceCost,
    pub days_until_ready: Option<u32>,
    pub t10_progress: Fixed64,
}

impl LeaderboardEntry {
    fn from_record(player: &PlayerRecord, income: &DailyIncome, full_t10: ResourceCost) -> Self {
        let report = player.project();
        let t10_remaining = report.t10;
        Self {
            rank: 0,
            player_id: player.id.clone(),
            name: player.name.clone(),
            total_power: player.total_power,
            report,
            t10_remaining,
            days_until_ready: days_until_ready(t10_remaining, income),
            t10_progress: completion(t10_remaining, full_t10),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.t10_remaining.is_zero()
    }
}

/// `None` sorts after every known day count.
pub(crate) fn cmp_days(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(sort: SortKey, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    match sort {
        SortKey::Power => b
            .total_power
            .cmp(&a.total_power)
            .then_with(|| a.name.cmp(&b.name)),
        SortKey::DaysUntilReady => cmp_days(a.days_until_ready, b.days_until_ready)
            .then_with(|| a.t10_remaining.gold.cmp(&b.t10_remaining.gold))
            .then_with(|| a.name.cmp(&b.name)),
    }
    .then_with(|| a.player_id.cmp(&b.player_id))
}

#[cfg(feature = "parallel")]
fn project_all(players: &[PlayerRecord], income: &DailyIncome) -> Vec<LeaderboardEntry> {
    use rayon::prelude::*;
    let full_t10 = full_unlock_tree_cost();
    players
        .par_iter()
        .map(|p| LeaderboardEntry::from_record(p, income, full_t10))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn project_all(players: &[PlayerRecord], income: &DailyIncome) -> Vec<LeaderboardEntry> {
    let full_t10 = full_unlock_tree_cost();
    players
        .iter()
        .map(|p| LeaderboardEntry::from_record(p, income, full_t10))
        .collect()
}

/// Project every player, apply the visibility settings, and rank.
pub fn build_leaderboard(
    players: &[PlayerRecord],
    income: &DailyIncome,
    settings: &LeaderboardSettings,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = project_all(players, income)
        .into_iter()
        .filter(|e| e.total_power >= settings.min_power)
        .filter(|e| !(settings.hide_completed && e.is_ready()))
        .collect();

    entries.sort_by(|a, b| compare(settings.sort, a, b));
    if let Some(n) = settings.top_n {
        entries.truncate(n);
    }
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}
