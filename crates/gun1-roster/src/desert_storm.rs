//! Desert Storm sign-ups and team rosters.

use crate::player::{PlayerId, PlayerRecord};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

/// Team a player asked for when registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TeamPreference {
    A,
    B,
    #[default]
    Either,
}

impl TeamPreference {
    pub fn team(self) -> Option<Team> {
        match self {
            TeamPreference::A => Some(Team::A),
            TeamPreference::B => Some(Team::B),
            TeamPreference::Either => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub player_id: PlayerId,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub team: TeamPreference,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub player_id: PlayerId,
    pub name: String,
    pub total_power: u64,
}

/// Both teams for one event plus everyone who did not fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRoster {
    pub event_date: NaiveDate,
    pub team_a: Vec<RosterMember>,
    pub team_b: Vec<RosterMember>,
    pub substitutes: Vec<RosterMember>,
}

impl EventRoster {
    /// Split the registrations for `event_date` into two teams of at most
    /// `team_size`.
    ///
    /// Explicit preferences are seated first, strongest first; anyone who
    /// does not fit their chosen team becomes a substitute. `Either`
    /// registrations then go, strongest first, to whichever team is
    /// smaller (team A on a tie).
    pub fn build(
        event_date: NaiveDate,
        players: &[PlayerRecord],
        registrations: &[Registration],
        team_size: usize,
    ) -> Self {
        let by_id: HashMap<&PlayerId, &PlayerRecord> =
            players.iter().map(|p| (&p.id, p)).collect();

        let mut signed: Vec<(TeamPreference, RosterMember)> = Vec::new();
        for reg in registrations.iter().filter(|r| r.event_date == event_date) {
            let Some(player) = by_id.get(&reg.player_id) else {
                log::debug!(
                    "Ignoring Desert Storm registration for unknown player {}",
                    reg.player_id
                );
                continue;
            };
            if signed.iter().any(|(_, m)| m.player_id == reg.player_id) {
                continue;
            }
            signed.push((
                reg.team,
                RosterMember {
                    player_id: player.id.clone(),
                    name: player.name.clone(),
                    total_power: player.total_power,
                },
            ));
        }
        signed.sort_by(|(_, a), (_, b)| {
            b.total_power
                .cmp(&a.total_power)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.player_id.cmp(&b.player_id))
        });

        let mut roster = Self {
            event_date,
            team_a: Vec::new(),
            team_b: Vec::new(),
            substitutes: Vec::new(),
        };

        let (explicit, flexible): (Vec<_>, Vec<_>) = signed
            .into_iter()
            .partition(|(pref, _)| pref.team().is_some());

        for (pref, member) in explicit {
            let team = match pref.team() {
                Some(Team::A) => &mut roster.team_a,
                Some(Team::B) => &mut roster.team_b,
                None => continue,
            };
            if team.len() < team_size {
                team.push(member);
            } else {
                roster.substitutes.push(member);
            }
        }

        for (_, member) in flexible {
            let a = roster.team_a.len();
            let b = roster.team_b.len();
            if a <= b && a < team_size {
                roster.team_a.push(member);
            } else if b < team_size {
                roster.team_b.push(member);
            } else {
                roster.substitutes.push(member);
            }
        }

        log::debug!(
            "Desert Storm {event_date}: {} on A, {} on B, {} substitutes",
            roster.team_a.len(),
            roster.team_b.len(),
            roster.substitutes.len()
        );
        roster
    }

    pub fn team(&self, team: Team) -> &[RosterMember] {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    pub fn team_power(&self, team: Team) -> u64 {
        self.team(team)
            .iter()
            .fold(0u64, |acc, m| acc.saturating_add(m.total_power))
    }
}

/// First `weekday` on or after `from`.
pub fn next_event_date(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    from.checked_add_days(Days::new(u64::from(ahead)))
        .unwrap_or(from)
}
