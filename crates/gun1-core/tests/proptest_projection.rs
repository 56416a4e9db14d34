//! Property-based tests for the cost projection engine.
//!
//! Uses proptest to generate arbitrary (including out-of-range) progression
//! records, then checks the invariants every projection must hold.

use gun1_core::level::Level;
use gun1_core::progression::{
    MasteryLevels, MasteryNode, MasteryTree, PerkLevels, PerkNode, ProgressionState,
    UnlockLevels, UnlockNode,
};
use gun1_core::projection::*;
use gun1_core::resource::ResourceCost;
use gun1_core::tables::*;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

/// Levels from zero to a little past the cap, so over-cap input is covered.
fn arb_level(max: u8) -> impl Strategy<Value = Level> {
    (0..=max.saturating_add(3)).prop_map(Level::new)
}

fn arb_unlock() -> impl Strategy<Value = UnlockLevels> {
    (
        arb_level(10),
        arb_level(10),
        arb_level(10),
        arb_level(10),
        prop_oneof![Just(Level::ZERO), Just(Level::new(10)), arb_level(10)],
        arb_level(BUILDING_MAX_LEVEL),
        arb_level(BUILDING_MAX_LEVEL),
    )
        .prop_map(
            |(protection, hp, attack, defense, elite_unlocked, barracks_level, tech_level)| {
                UnlockLevels {
                    protection,
                    hp,
                    attack,
                    defense,
                    elite_unlocked,
                    barracks_level,
                    tech_level,
                }
            },
        )
}

fn arb_perks() -> impl Strategy<Value = PerkLevels> {
    proptest::collection::vec(0u8..=12, PerkNode::ALL.len()).prop_map(|raw| {
        let mut perks = PerkLevels::default();
        for (node, level) in PerkNode::ALL.into_iter().zip(raw) {
            perks.set(node, Level::new(level));
        }
        perks
    })
}

fn arb_mastery() -> impl Strategy<Value = MasteryLevels> {
    proptest::collection::vec(0u8..=12, MasteryNode::ALL.len()).prop_map(|raw| {
        let mut levels = MasteryLevels::default();
        for (node, level) in MasteryNode::ALL.into_iter().zip(raw) {
            levels.set(node, Level::new(level));
        }
        levels
    })
}

fn arb_tree() -> impl Strategy<Value = MasteryTree> {
    prop_oneof![
        Just(MasteryTree::Air),
        Just(MasteryTree::Tank),
        Just(MasteryTree::Missile),
    ]
}

fn arb_state() -> impl Strategy<Value = ProgressionState> {
    (arb_unlock(), arb_perks(), arb_mastery(), arb_mastery(), arb_mastery()).prop_map(
        |(t10, perks, air, tank, missile)| {
            let mut state = ProgressionState {
                t10,
                perks,
                ..ProgressionState::default()
            };
            state.mastery.air = air;
            state.mastery.tank = tank;
            state.mastery.missile = missile;
            state
        },
    )
}

/// The price of raising a T10 node from `level` by one.
fn unlock_step(node: UnlockNode, level: Level) -> ResourceCost {
    let curve: &[ResourceCost] = match node {
        UnlockNode::Protection => &ADV_PROT,
        UnlockNode::Hp | UnlockNode::Attack | UnlockNode::Defense => &BOOST3,
        UnlockNode::BarracksLevel => &BARRACKS,
        UnlockNode::TechLevel => &TECH_CENTER,
        UnlockNode::EliteUnlocked => unreachable!("elite flag has no per-level curve"),
    };
    curve.get(level.index()).copied().unwrap_or(ResourceCost::ZERO)
}

fn le(a: ResourceCost, b: ResourceCost) -> bool {
    a.gold <= b.gold && a.valor <= b.valor && a.food_iron <= b.food_iron
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Raising any leveled T10 node by one lowers the total by exactly that
    /// level's table entry.
    #[test]
    fn unlock_monotone_by_exact_step(levels in arb_unlock(), pick in 0..6usize) {
        let node = [
            UnlockNode::Protection,
            UnlockNode::Hp,
            UnlockNode::Attack,
            UnlockNode::Defense,
            UnlockNode::BarracksLevel,
            UnlockNode::TechLevel,
        ][pick];
        let before = project_unlock_tree_cost(&levels);
        let mut raised = levels;
        raised.set(node, levels.get(node).next());
        let after = project_unlock_tree_cost(&raised);

        prop_assert!(le(after, before));
        prop_assert_eq!(after + unlock_step(node, levels.get(node)), before);
    }

    /// Unlocking the elite flag removes exactly the flat unlock cost.
    #[test]
    fn elite_unlock_is_flat(levels in arb_unlock()) {
        let mut locked = levels;
        locked.elite_unlocked = Level::ZERO;
        let mut unlocked = levels;
        unlocked.elite_unlocked = Level::new(ELITE_UNLOCKED);

        prop_assert_eq!(
            project_unlock_tree_cost(&unlocked) + ELITE_UNLOCK,
            project_unlock_tree_cost(&locked)
        );
    }

    #[test]
    fn perk_monotone_by_exact_step(perks in arb_perks(), pick in 0..16usize) {
        let node = PerkNode::ALL[pick];
        let level = perks.get(node);
        let before = project_perk_tree_cost(&perks);
        let mut raised = perks;
        raised.set(node, level.next());
        let after = project_perk_tree_cost(&raised);

        let step = perk_node_cost(node, level).saturating_sub(perk_node_cost(node, level.next()));
        let expected_step = match perk_curve(node.tier()) {
            Some(curve) => curve.get(level.index()).copied().unwrap_or(ResourceCost::ZERO),
            None if level == Level::ZERO => PERK_UNLOCK,
            None => ResourceCost::ZERO,
        };
        prop_assert_eq!(step, expected_step);
        prop_assert_eq!(after + expected_step, before);
    }

    #[test]
    fn mastery_monotone_by_exact_step(
        tree in arb_tree(),
        levels in arb_mastery(),
        pick in 0..20usize,
    ) {
        let node = MasteryNode::ALL[pick];
        let level = levels.get(node).unwrap_or(Level::ZERO);
        let before = project_mastery_tree_cost(tree, &levels);
        let mut raised = levels;
        raised.set(node, level.next());
        let after = project_mastery_tree_cost(tree, &raised);

        let curve: &[ResourceCost] = if node.max_level() == SPECIAL_NODE_MAX {
            &MASTERY_SPECIAL
        } else {
            &MASTERY_STAT
        };
        let expected_step = curve.get(level.index()).copied().unwrap_or(ResourceCost::ZERO);
        prop_assert_eq!(after + expected_step, before);
    }

    /// Every projection is bounded by its from-scratch price.
    #[test]
    fn never_exceeds_full_price(state in arb_state()) {
        let full = ProjectionReport::full();
        let report = project_progression(&state);
        prop_assert!(le(report.t10, full.t10));
        prop_assert!(le(report.perks, full.perks));
        prop_assert!(le(report.air, full.air));
        prop_assert!(le(report.total(), full.total()));
    }

    /// No hidden state: identical input, identical output.
    #[test]
    fn projection_is_idempotent(state in arb_state()) {
        prop_assert_eq!(project_progression(&state), project_progression(&state));
    }

    /// Changing mastery input never moves the T10 or perk projection, and
    /// vice versa.
    #[test]
    fn trees_are_isolated(a in arb_state(), b in arb_state()) {
        let mut mixed = a;
        mixed.mastery = b.mastery;
        let ra = project_progression(&a);
        let rm = project_progression(&mixed);
        prop_assert_eq!(rm.t10, ra.t10);
        prop_assert_eq!(rm.perks, ra.perks);

        let mut mixed = a;
        mixed.t10 = b.t10;
        mixed.perks = b.perks;
        let rm = project_progression(&mixed);
        prop_assert_eq!(rm.air, ra.air);
        prop_assert_eq!(rm.tank, ra.tank);
        prop_assert_eq!(rm.missile, ra.missile);
    }

    /// Leaving a field out of the input is the same as sending 0.
    #[test]
    fn missing_field_equals_zero(levels in arb_unlock(), pick in 0..7usize) {
        let node = UnlockNode::ALL[pick];
        let mut zeroed = levels;
        zeroed.set(node, Level::ZERO);

        let mut json = serde_json::to_value(levels).unwrap();
        let key = match node {
            UnlockNode::Protection => "protection",
            UnlockNode::Hp => "hp",
            UnlockNode::Attack => "attack",
            UnlockNode::Defense => "defense",
            UnlockNode::EliteUnlocked => "eliteUnlocked",
            UnlockNode::BarracksLevel => "barracksLevel",
            UnlockNode::TechLevel => "techLevel",
        };
        json.as_object_mut().unwrap().remove(key);
        let parsed: UnlockLevels = serde_json::from_value(json).unwrap();

        prop_assert_eq!(parsed, zeroed);
        prop_assert_eq!(project_unlock_tree_cost(&parsed), project_unlock_tree_cost(&zeroed));
    }
}

// ===========================================================================
// Node-level boundaries
// ===========================================================================

#[test]
fn every_perk_node_at_max_is_free_and_at_zero_is_full() {
    for node in PerkNode::ALL {
        assert_eq!(
            perk_node_cost(node, Level::new(node.max_level())),
            ResourceCost::ZERO,
            "{node:?} at max"
        );
        let full = match perk_curve(node.tier()) {
            Some(curve) => curve.iter().sum(),
            None => PERK_UNLOCK,
        };
        assert_eq!(perk_node_cost(node, Level::ZERO), full, "{node:?} at zero");
    }
}

#[test]
fn every_mastery_node_at_max_is_free() {
    for node in MasteryNode::ALL {
        let mut levels = MasteryLevels::default();
        for other in MasteryNode::ALL {
            levels.set(other, Level::new(other.max_level()));
        }
        levels.set(node, Level::ZERO);
        let owed = project_mastery_tree_cost(MasteryTree::Tank, &levels);
        let expected: ResourceCost = if node.max_level() == SPECIAL_NODE_MAX {
            MASTERY_SPECIAL.iter().sum()
        } else {
            MASTERY_STAT.iter().sum()
        };
        assert_eq!(owed, expected, "{node:?} alone at zero");
    }
}
