//! Train-duty rotation.
//!
//! Each day one or more members conduct the alliance train. Conductors are
//! picked from players who still owe T10 resources, closest to finishing
//! first, and nobody conducts twice inside the cooldown window.

use crate::leaderboard::{DailyIncome, cmp_days, days_until_ready};
use crate::player::{PlayerId, PlayerRecord};
use chrono::{Days, NaiveDate};
use gun1_core::ResourceCost;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One conductor on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDuty {
    pub date: NaiveDate,
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainPolicy {
    pub conductors_per_day: u32,
    /// A player who conducted on day `d` is skipped through `d + cooldown_days`.
    pub cooldown_days: u32,
}

impl Default for TrainPolicy {
    fn default() -> Self {
        Self {
            conductors_per_day: 1,
            cooldown_days: 7,
        }
    }
}

struct Candidate<'a> {
    id: &'a PlayerId,
    name: &'a str,
    remaining: ResourceCost,
    days: Option<u32>,
}

/// Players still working on T10, closest to finishing first.
fn candidates<'a>(players: &'a [PlayerRecord], income: &DailyIncome) -> Vec<Candidate<'a>> {
    let mut out: Vec<Candidate<'a>> = players
        .iter()
        .filter_map(|p| {
            let remaining = p.t10_remaining();
            if remaining.is_zero() {
                return None;
            }
            Some(Candidate {
                id: &p.id,
                name: &p.name,
                remaining,
                days: days_until_ready(remaining, income),
            })
        })
        .collect();
    out.sort_by(|a, b| {
        cmp_days(a.days, b.days)
            .then_with(|| a.remaining.gold.cmp(&b.remaining.gold))
            .then_with(|| a.name.cmp(b.name))
            .then_with(|| a.id.cmp(b.id))
    });
    out
}

/// True when one of `duties` falls on `day` or within `cooldown_days` before
/// it. Bookings after `day` never count.
fn on_cooldown(duties: Option<&[NaiveDate]>, day: NaiveDate, cooldown_days: u32) -> bool {
    let window = 0..=i64::from(cooldown_days);
    duties.is_some_and(|dates| {
        dates
            .iter()
            .any(|&date| window.contains(&(day - date).num_days()))
    })
}

/// Plan `days` days of train duty starting at `start`.
///
/// `history` holds duty already on the books; it counts toward cooldowns and
/// toward each day's quota. Only new assignments are returned. A day keeps
/// fewer conductors when everyone eligible is on cooldown.
pub fn assign_train_duty(
    players: &[PlayerRecord],
    history: &[TrainDuty],
    start: NaiveDate,
    days: u32,
    income: &DailyIncome,
    policy: &TrainPolicy,
) -> Vec<TrainDuty> {
    let ranked = candidates(players, income);

    let mut duty_dates: HashMap<&PlayerId, Vec<NaiveDate>> = HashMap::new();
    for duty in history {
        duty_dates.entry(&duty.player_id).or_default().push(duty.date);
    }

    let mut assigned = Vec::new();
    for offset in 0..days {
        let Some(day) = start.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };

        let booked = history.iter().filter(|d| d.date == day).count();
        let mut open = (policy.conductors_per_day as usize).saturating_sub(booked);

        for candidate in &ranked {
            if open == 0 {
                break;
            }
            let busy = history
                .iter()
                .any(|d| d.date == day && &d.player_id == candidate.id);
            let dates = duty_dates.get(candidate.id).map(Vec::as_slice);
            if busy || on_cooldown(dates, day, policy.cooldown_days) {
                continue;
            }
            log::debug!("Train duty on {day}: {}", candidate.id);
            duty_dates.entry(candidate.id).or_default().push(day);
            assigned.push(TrainDuty {
                date: day,
                player_id: candidate.id.clone(),
            });
            open -= 1;
        }

        if open > 0 {
            log::debug!("Train duty on {day}: {open} slot(s) left open, everyone on cooldown");
        }
    }
    assigned
}
