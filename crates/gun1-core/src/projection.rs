//! Remaining-cost projection for each upgrade tree.
//!
//! All functions here are pure: they read a progression record, walk the
//! static tables in [`crate::tables`], and return the cost still owed.
//! Levels past a node's cap are treated as complete; nothing here can
//! index out of range or fail.

use crate::level::Level;
use crate::progression::{
    MasteryLevels, MasteryTree, PerkLevels, PerkNode, PerkTier, ProgressionState, UnlockLevels,
};
use crate::resource::ResourceCost;
use crate::tables::{
    ADV_PROT, BARRACKS, BOOST3, ELITE_UNLOCK, ELITE_UNLOCKED, MASTERY_SPECIAL, MASTERY_STAT,
    PERK_UNLOCK, PERK_UNLOCKED, TECH_CENTER, TIER_A, TIER_B, TIER_C, TIER_D, TIER_E,
};
use serde::{Deserialize, Serialize};

/// Sum of the entries a node at `level` has not paid for yet.
pub fn remaining_on_curve(curve: &[ResourceCost], level: Level) -> ResourceCost {
    curve
        .get(level.index()..)
        .map_or(ResourceCost::ZERO, |rest| rest.iter().sum())
}

/// Flat cost owed by a binary node until it reaches `unlocked`.
fn remaining_flat(cost: ResourceCost, level: Level, unlocked: u8) -> ResourceCost {
    if level.reached(unlocked) {
        ResourceCost::ZERO
    } else {
        cost
    }
}

// ---------------------------------------------------------------------------
// T10 unlock tree
// ---------------------------------------------------------------------------

/// Cost still owed to finish the T10 unlock tree: the four stat nodes, the
/// elite unlock, and both supporting buildings up to the target level.
pub fn project_unlock_tree_cost(levels: &UnlockLevels) -> ResourceCost {
    let stats = remaining_on_curve(&ADV_PROT, levels.protection)
        + remaining_on_curve(&BOOST3, levels.hp)
        + remaining_on_curve(&BOOST3, levels.attack)
        + remaining_on_curve(&BOOST3, levels.defense);

    let elite = remaining_flat(ELITE_UNLOCK, levels.elite_unlocked, ELITE_UNLOCKED);

    // Both tables stop at the target level, so any building at or past it
    // falls off the end of its curve.
    let buildings = remaining_on_curve(&BARRACKS, levels.barracks_level)
        + remaining_on_curve(&TECH_CENTER, levels.tech_level);

    stats + elite + buildings
}

/// Everything the T10 unlock tree costs from scratch.
pub fn full_unlock_tree_cost() -> ResourceCost {
    project_unlock_tree_cost(&UnlockLevels::default())
}

// ---------------------------------------------------------------------------
// STS perk tree
// ---------------------------------------------------------------------------

/// The resolved per-level curve for a tiered perk node. `None` for the flat
/// binary node.
pub fn perk_curve(tier: PerkTier) -> Option<&'static [ResourceCost; 10]> {
    match tier {
        PerkTier::A => Some(&TIER_A),
        PerkTier::B => Some(&TIER_B),
        PerkTier::C => Some(&TIER_C),
        PerkTier::D => Some(&TIER_D),
        PerkTier::E => Some(&TIER_E),
        PerkTier::Flat => None,
    }
}

/// Cost still owed by a single perk node.
pub fn perk_node_cost(node: PerkNode, level: Level) -> ResourceCost {
    match perk_curve(node.tier()) {
        Some(curve) => remaining_on_curve(curve, level),
        None => remaining_flat(PERK_UNLOCK, level, PERK_UNLOCKED),
    }
}

/// Cost still owed to finish all sixteen STS perk nodes.
pub fn project_perk_tree_cost(levels: &PerkLevels) -> ResourceCost {
    PerkNode::ALL
        .into_iter()
        .map(|node| perk_node_cost(node, levels.get(node)))
        .sum()
}

// ---------------------------------------------------------------------------
// Mastery trees
// ---------------------------------------------------------------------------

/// Cost still owed to finish one mastery tree.
///
/// The tree identity only says which tree `levels` was read from; all three
/// are priced from the same stat and special curves.
pub fn project_mastery_tree_cost(_tree: MasteryTree, levels: &MasteryLevels) -> ResourceCost {
    let stats: ResourceCost = levels
        .stat_levels()
        .into_iter()
        .map(|level| remaining_on_curve(&MASTERY_STAT, level))
        .sum();
    let specials: ResourceCost = levels
        .special_levels()
        .into_iter()
        .map(|level| remaining_on_curve(&MASTERY_SPECIAL, level))
        .sum();
    stats + specials
}

// ---------------------------------------------------------------------------
// Whole player
// ---------------------------------------------------------------------------

/// Remaining cost per tree for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub t10: ResourceCost,
    pub perks: ResourceCost,
    pub air: ResourceCost,
    pub tank: ResourceCost,
    pub missile: ResourceCost,
}

impl ProjectionReport {
    /// The report for a player who has not started any tree.
    pub fn full() -> Self {
        project_progression(&ProgressionState::default())
    }

    pub fn mastery(&self, tree: MasteryTree) -> ResourceCost {
        match tree {
            MasteryTree::Air => self.air,
            MasteryTree::Tank => self.tank,
            MasteryTree::Missile => self.missile,
        }
    }

    pub fn total(&self) -> ResourceCost {
        self.t10 + self.perks + self.air + self.tank + self.missile
    }

    pub fn is_complete(&self) -> bool {
        self.total().is_zero()
    }
}

/// Project every tree of a player at once.
pub fn project_progression(state: &ProgressionState) -> ProjectionReport {
    ProjectionReport {
        t10: project_unlock_tree_cost(&state.t10),
        perks: project_perk_tree_cost(&state.perks),
        air: project_mastery_tree_cost(MasteryTree::Air, &state.mastery.air),
        tank: project_mastery_tree_cost(MasteryTree::Tank, &state.mastery.tank),
        missile: project_mastery_tree_cost(MasteryTree::Missile, &state.mastery.missile),
    }
}
