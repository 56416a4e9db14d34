//! Alliance planner example: leaderboard, train duty, and Desert Storm.
//!
//! Builds a small alliance in memory, prints the days-until-ready
//! leaderboard, plans a week of train duty, and seats a Desert Storm event.
//!
//! Run with: `cargo run -p gun1-roster --example alliance_planner`

use chrono::{NaiveDate, TimeZone, Utc, Weekday};
use gun1_core::Level;
use gun1_core::fixed::completion_percent;
use gun1_roster::desert_storm::next_event_date;
use gun1_roster::*;

fn member(id: &str, name: &str, power: u64, t10_level: u8) -> PlayerRecord {
    let mut p = PlayerRecord::new(id, name);
    p.total_power = power;
    let t10 = &mut p.progression.t10;
    t10.protection = Level::new(t10_level);
    t10.hp = Level::new(t10_level);
    t10.attack = Level::new(t10_level.saturating_sub(1));
    t10.defense = Level::new(t10_level.saturating_sub(2));
    t10.barracks_level = Level::new(20 + t10_level);
    t10.tech_level = Level::new(18 + t10_level);
    p
}

fn main() {
    let mut store = MemoryStore::new();
    for p in [
        member("p1", "Ana", 182_000_000, 9),
        member("p2", "Bo", 164_000_000, 6),
        member("p3", "Cid", 171_000_000, 3),
        member("p4", "Dee", 98_000_000, 0),
    ] {
        store.upsert_player(p).expect("valid player");
    }
    let players = store.list_players().expect("memory store");

    // --- Leaderboard ---

    let income = DailyIncome::new(6_000_000, 400, 7_000_000);
    let settings = LeaderboardSettings {
        sort: SortKey::DaysUntilReady,
        ..LeaderboardSettings::default()
    };
    let full_t10 = gun1_core::ProjectionReport::full().t10;
    println!("=== Leaderboard (days until T10) ===\n");
    for entry in build_leaderboard(&players, &income, &settings) {
        let days = entry
            .days_until_ready
            .map_or_else(|| "never".to_string(), |d| d.to_string());
        println!(
            "{:>2}. {:<4} {:>4} days  {:>3}% done  {} gold left",
            entry.rank,
            entry.name,
            days,
            completion_percent(entry.t10_remaining, full_t10),
            entry.t10_remaining.gold,
        );
    }

    // --- Train duty ---

    let start = NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date");
    let plan = assign_train_duty(
        &players,
        &store.list_train_duty().expect("memory store"),
        start,
        7,
        &income,
        &TrainPolicy {
            conductors_per_day: 1,
            cooldown_days: 2,
        },
    );
    store.save_train_duty(&plan).expect("memory store");
    println!("\n=== Train duty ===\n");
    for duty in store.list_train_duty().expect("memory store") {
        println!("{}  {}", duty.date, duty.player_id);
    }

    // --- Desert Storm ---

    let event = next_event_date(start, Weekday::Fri);
    for (i, (id, team)) in [
        ("p1", TeamPreference::A),
        ("p2", TeamPreference::Either),
        ("p3", TeamPreference::Either),
        ("p4", TeamPreference::B),
    ]
    .into_iter()
    .enumerate()
    {
        store
            .register(Registration {
                player_id: PlayerId::new(id),
                event_date: event,
                team,
                registered_at: Utc
                    .with_ymd_and_hms(2026, 6, 1, 9, i as u32, 0)
                    .single()
                    .expect("valid timestamp"),
            })
            .expect("memory store");
    }
    let registrations = store.list_registrations(event).expect("memory store");
    let roster = EventRoster::build(event, &players, &registrations, 2);

    println!("\n=== Desert Storm {event} ===\n");
    for team in [Team::A, Team::B] {
        let names: Vec<&str> = roster.team(team).iter().map(|m| m.name.as_str()).collect();
        println!("Team {team:?} ({} power): {}", roster.team_power(team), names.join(", "));
    }
}
