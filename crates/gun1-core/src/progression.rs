//! Typed progression records for the four upgrade trees.
//!
//! Each record has one named [`Level`] per node. All records default to
//! all-zero and deserialize field-by-field with `#[serde(default)]`, so a
//! partial record is indistinguishable from one whose missing nodes are 0.

use crate::level::{Level, lenient_record};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// T10 unlock tree
// ---------------------------------------------------------------------------

/// Levels for the T10 unlock tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnlockLevels {
    pub protection: Level,
    pub hp: Level,
    pub attack: Level,
    pub defense: Level,
    /// Binary: 0 while locked, 10 once unlocked.
    pub elite_unlocked: Level,
    pub barracks_level: Level,
    pub tech_level: Level,
}

/// A node of the T10 unlock tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnlockNode {
    Protection,
    Hp,
    Attack,
    Defense,
    EliteUnlocked,
    BarracksLevel,
    TechLevel,
}

impl UnlockNode {
    pub const ALL: [UnlockNode; 7] = [
        UnlockNode::Protection,
        UnlockNode::Hp,
        UnlockNode::Attack,
        UnlockNode::Defense,
        UnlockNode::EliteUnlocked,
        UnlockNode::BarracksLevel,
        UnlockNode::TechLevel,
    ];

    /// The four parallel stat nodes.
    pub const STATS: [UnlockNode; 4] = [
        UnlockNode::Protection,
        UnlockNode::Hp,
        UnlockNode::Attack,
        UnlockNode::Defense,
    ];
}

impl UnlockLevels {
    pub fn get(&self, node: UnlockNode) -> Level {
        match node {
            UnlockNode::Protection => self.protection,
            UnlockNode::Hp => self.hp,
            UnlockNode::Attack => self.attack,
            UnlockNode::Defense => self.defense,
            UnlockNode::EliteUnlocked => self.elite_unlocked,
            UnlockNode::BarracksLevel => self.barracks_level,
            UnlockNode::TechLevel => self.tech_level,
        }
    }

    pub fn set(&mut self, node: UnlockNode, level: Level) {
        let slot = match node {
            UnlockNode::Protection => &mut self.protection,
            UnlockNode::Hp => &mut self.hp,
            UnlockNode::Attack => &mut self.attack,
            UnlockNode::Defense => &mut self.defense,
            UnlockNode::EliteUnlocked => &mut self.elite_unlocked,
            UnlockNode::BarracksLevel => &mut self.barracks_level,
            UnlockNode::TechLevel => &mut self.tech_level,
        };
        *slot = level;
    }
}

// ---------------------------------------------------------------------------
// STS perk tree
// ---------------------------------------------------------------------------

/// Levels for the sixteen-node STS perk tree, in topological order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerkLevels {
    pub power_boost: Level,
    pub final_stand: Level,
    pub fierce_assault: Level,
    pub vigilant_formation: Level,
    /// Binary: 0 while locked, 1 once unlocked.
    pub elite_training: Level,
    pub barrack_expansion: Level,
    pub focused_training: Level,
    pub endurance_drill: Level,
    pub assault_drill: Level,
    pub guard_drill: Level,
    pub drill_ground_expansion: Level,
    pub rapid_march: Level,
    pub iron_will: Level,
    pub relentless_assault: Level,
    pub unbreakable_formation: Level,
    pub fatal_strike: Level,
}

/// Which cost table a perk node is priced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerkTier {
    A,
    B,
    C,
    D,
    E,
    /// Single flat unlock cost, no levels.
    Flat,
}

/// A node of the STS perk tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerkNode {
    PowerBoost,
    FinalStand,
    FierceAssault,
    VigilantFormation,
    EliteTraining,
    BarrackExpansion,
    FocusedTraining,
    EnduranceDrill,
    AssaultDrill,
    GuardDrill,
    DrillGroundExpansion,
    RapidMarch,
    IronWill,
    RelentlessAssault,
    UnbreakableFormation,
    FatalStrike,
}

impl PerkNode {
    /// Every node in topological order.
    pub const ALL: [PerkNode; 16] = [
        PerkNode::PowerBoost,
        PerkNode::FinalStand,
        PerkNode::FierceAssault,
        PerkNode::VigilantFormation,
        PerkNode::EliteTraining,
        PerkNode::BarrackExpansion,
        PerkNode::FocusedTraining,
        PerkNode::EnduranceDrill,
        PerkNode::AssaultDrill,
        PerkNode::GuardDrill,
        PerkNode::DrillGroundExpansion,
        PerkNode::RapidMarch,
        PerkNode::IronWill,
        PerkNode::RelentlessAssault,
        PerkNode::UnbreakableFormation,
        PerkNode::FatalStrike,
    ];

    /// The fixed tier assignment for this node.
    pub const fn tier(self) -> PerkTier {
        match self {
            PerkNode::PowerBoost => PerkTier::A,
            PerkNode::FinalStand | PerkNode::FierceAssault | PerkNode::VigilantFormation => {
                PerkTier::B
            }
            PerkNode::EliteTraining => PerkTier::Flat,
            PerkNode::BarrackExpansion
            | PerkNode::FocusedTraining
            | PerkNode::EnduranceDrill
            | PerkNode::AssaultDrill
            | PerkNode::GuardDrill => PerkTier::C,
            PerkNode::DrillGroundExpansion | PerkNode::RapidMarch => PerkTier::D,
            PerkNode::IronWill
            | PerkNode::RelentlessAssault
            | PerkNode::UnbreakableFormation
            | PerkNode::FatalStrike => PerkTier::E,
        }
    }

    /// Level at which the node stops costing anything.
    pub const fn max_level(self) -> u8 {
        match self.tier() {
            PerkTier::Flat => crate::tables::PERK_UNLOCKED,
            _ => crate::tables::STAT_NODE_MAX,
        }
    }
}

impl PerkLevels {
    pub fn get(&self, node: PerkNode) -> Level {
        match node {
            PerkNode::PowerBoost => self.power_boost,
            PerkNode::FinalStand => self.final_stand,
            PerkNode::FierceAssault => self.fierce_assault,
            PerkNode::VigilantFormation => self.vigilant_formation,
            PerkNode::EliteTraining => self.elite_training,
            PerkNode::BarrackExpansion => self.barrack_expansion,
            PerkNode::FocusedTraining => self.focused_training,
            PerkNode::EnduranceDrill => self.endurance_drill,
            PerkNode::AssaultDrill => self.assault_drill,
            PerkNode::GuardDrill => self.guard_drill,
            PerkNode::DrillGroundExpansion => self.drill_ground_expansion,
            PerkNode::RapidMarch => self.rapid_march,
            PerkNode::IronWill => self.iron_will,
            PerkNode::RelentlessAssault => self.relentless_assault,
            PerkNode::UnbreakableFormation => self.unbreakable_formation,
            PerkNode::FatalStrike => self.fatal_strike,
        }
    }

    pub fn set(&mut self, node: PerkNode, level: Level) {
        let slot = match node {
            PerkNode::PowerBoost => &mut self.power_boost,
            PerkNode::FinalStand => &mut self.final_stand,
            PerkNode::FierceAssault => &mut self.fierce_assault,
            PerkNode::VigilantFormation => &mut self.vigilant_formation,
            PerkNode::EliteTraining => &mut self.elite_training,
            PerkNode::BarrackExpansion => &mut self.barrack_expansion,
            PerkNode::FocusedTraining => &mut self.focused_training,
            PerkNode::EnduranceDrill => &mut self.endurance_drill,
            PerkNode::AssaultDrill => &mut self.assault_drill,
            PerkNode::GuardDrill => &mut self.guard_drill,
            PerkNode::DrillGroundExpansion => &mut self.drill_ground_expansion,
            PerkNode::RapidMarch => &mut self.rapid_march,
            PerkNode::IronWill => &mut self.iron_will,
            PerkNode::RelentlessAssault => &mut self.relentless_assault,
            PerkNode::UnbreakableFormation => &mut self.unbreakable_formation,
            PerkNode::FatalStrike => &mut self.fatal_strike,
        };
        *slot = level;
    }
}

// ---------------------------------------------------------------------------
// Mastery trees
// ---------------------------------------------------------------------------

/// Which of the three mastery trees a record belongs to. Pricing is
/// identical across all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryTree {
    Air,
    Tank,
    Missile,
}

impl MasteryTree {
    pub const ALL: [MasteryTree; 3] = [MasteryTree::Air, MasteryTree::Tank, MasteryTree::Missile];

    pub const fn name(self) -> &'static str {
        match self {
            MasteryTree::Air => "air",
            MasteryTree::Tank => "tank",
            MasteryTree::Missile => "missile",
        }
    }
}

/// Whether a mastery node is capped at 10 (stat) or 5 (special).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasteryKind {
    Stat,
    Special,
}

/// A node of a mastery tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasteryNode {
    Hp(u8),
    Attack(u8),
    Defense(u8),
    UltimateDefense(u8),
    Damage(u8),
    MarchSize(u8),
}

impl MasteryNode {
    /// All twenty nodes: sixteen stat nodes, then four special nodes.
    pub const ALL: [MasteryNode; 20] = [
        MasteryNode::Hp(1),
        MasteryNode::Hp(2),
        MasteryNode::Hp(3),
        MasteryNode::Hp(4),
        MasteryNode::Attack(1),
        MasteryNode::Attack(2),
        MasteryNode::Attack(3),
        MasteryNode::Attack(4),
        MasteryNode::Defense(1),
        MasteryNode::Defense(2),
        MasteryNode::Defense(3),
        MasteryNode::Defense(4),
        MasteryNode::UltimateDefense(1),
        MasteryNode::UltimateDefense(2),
        MasteryNode::UltimateDefense(3),
        MasteryNode::UltimateDefense(4),
        MasteryNode::Damage(1),
        MasteryNode::Damage(2),
        MasteryNode::MarchSize(1),
        MasteryNode::MarchSize(2),
    ];

    pub const fn kind(self) -> MasteryKind {
        match self {
            MasteryNode::Damage(_) | MasteryNode::MarchSize(_) => MasteryKind::Special,
            _ => MasteryKind::Stat,
        }
    }

    pub const fn max_level(self) -> u8 {
        match self.kind() {
            MasteryKind::Stat => crate::tables::STAT_NODE_MAX,
            MasteryKind::Special => crate::tables::SPECIAL_NODE_MAX,
        }
    }
}

/// Levels for one mastery tree. The same record type serves air, tank,
/// and missile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MasteryLevels {
    pub hp1: Level,
    pub hp2: Level,
    pub hp3: Level,
    pub hp4: Level,
    pub attack1: Level,
    pub attack2: Level,
    pub attack3: Level,
    pub attack4: Level,
    pub defense1: Level,
    pub defense2: Level,
    pub defense3: Level,
    pub defense4: Level,
    pub ultimate_defense1: Level,
    pub ultimate_defense2: Level,
    pub ultimate_defense3: Level,
    pub ultimate_defense4: Level,
    pub damage1: Level,
    pub damage2: Level,
    pub march_size1: Level,
    pub march_size2: Level,
}

impl MasteryLevels {
    /// The node's level, or `None` for a slot number the tree doesn't have.
    pub fn get(&self, node: MasteryNode) -> Option<Level> {
        self.slot(node).copied()
    }

    /// Set a node's level. Returns `false` for a slot the tree doesn't have.
    pub fn set(&mut self, node: MasteryNode, level: Level) -> bool {
        match self.slot_mut(node) {
            Some(slot) => {
                *slot = level;
                true
            }
            None => false,
        }
    }

    pub fn stat_levels(&self) -> [Level; 16] {
        [
            self.hp1,
            self.hp2,
            self.hp3,
            self.hp4,
            self.attack1,
            self.attack2,
            self.attack3,
            self.attack4,
            self.defense1,
            self.defense2,
            self.defense3,
            self.defense4,
            self.ultimate_defense1,
            self.ultimate_defense2,
            self.ultimate_defense3,
            self.ultimate_defense4,
        ]
    }

    pub fn special_levels(&self) -> [Level; 4] {
        [self.damage1, self.damage2, self.march_size1, self.march_size2]
    }

    fn slot(&self, node: MasteryNode) -> Option<&Level> {
        let slot = match node {
            MasteryNode::Hp(1) => &self.hp1,
            MasteryNode::Hp(2) => &self.hp2,
            MasteryNode::Hp(3) => &self.hp3,
            MasteryNode::Hp(4) => &self.hp4,
            MasteryNode::Attack(1) => &self.attack1,
            MasteryNode::Attack(2) => &self.attack2,
            MasteryNode::Attack(3) => &self.attack3,
            MasteryNode::Attack(4) => &self.attack4,
            MasteryNode::Defense(1) => &self.defense1,
            MasteryNode::Defense(2) => &self.defense2,
            MasteryNode::Defense(3) => &self.defense3,
            MasteryNode::Defense(4) => &self.defense4,
            MasteryNode::UltimateDefense(1) => &self.ultimate_defense1,
            MasteryNode::UltimateDefense(2) => &self.ultimate_defense2,
            MasteryNode::UltimateDefense(3) => &self.ultimate_defense3,
            MasteryNode::UltimateDefense(4) => &self.ultimate_defense4,
            MasteryNode::Damage(1) => &self.damage1,
            MasteryNode::Damage(2) => &self.damage2,
            MasteryNode::MarchSize(1) => &self.march_size1,
            MasteryNode::MarchSize(2) => &self.march_size2,
            _ => return None,
        };
        Some(slot)
    }

    fn slot_mut(&mut self, node: MasteryNode) -> Option<&mut Level> {
        let slot = match node {
            MasteryNode::Hp(1) => &mut self.hp1,
            MasteryNode::Hp(2) => &mut self.hp2,
            MasteryNode::Hp(3) => &mut self.hp3,
            MasteryNode::Hp(4) => &mut self.hp4,
            MasteryNode::Attack(1) => &mut self.attack1,
            MasteryNode::Attack(2) => &mut self.attack2,
            MasteryNode::Attack(3) => &mut self.attack3,
            MasteryNode::Attack(4) => &mut self.attack4,
            MasteryNode::Defense(1) => &mut self.defense1,
            MasteryNode::Defense(2) => &mut self.defense2,
            MasteryNode::Defense(3) => &mut self.defense3,
            MasteryNode::Defense(4) => &mut self.defense4,
            MasteryNode::UltimateDefense(1) => &mut self.ultimate_defense1,
            MasteryNode::UltimateDefense(2) => &mut self.ultimate_defense2,
            MasteryNode::UltimateDefense(3) => &mut self.ultimate_defense3,
            MasteryNode::UltimateDefense(4) => &mut self.ultimate_defense4,
            MasteryNode::Damage(1) => &mut self.damage1,
            MasteryNode::Damage(2) => &mut self.damage2,
            MasteryNode::MarchSize(1) => &mut self.march_size1,
            MasteryNode::MarchSize(2) => &mut self.march_size2,
            _ => return None,
        };
        Some(slot)
    }
}

/// The three mastery trees of one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MasteryTrees {
    #[serde(deserialize_with = "lenient_record")]
    pub air: MasteryLevels,
    #[serde(deserialize_with = "lenient_record")]
    pub tank: MasteryLevels,
    #[serde(deserialize_with = "lenient_record")]
    pub missile: MasteryLevels,
}

impl MasteryTrees {
    pub fn get(&self, tree: MasteryTree) -> &MasteryLevels {
        match tree {
            MasteryTree::Air => &self.air,
            MasteryTree::Tank => &self.tank,
            MasteryTree::Missile => &self.missile,
        }
    }

    pub fn get_mut(&mut self, tree: MasteryTree) -> &mut MasteryLevels {
        match tree {
            MasteryTree::Air => &mut self.air,
            MasteryTree::Tank => &mut self.tank,
            MasteryTree::Missile => &mut self.missile,
        }
    }
}

// ---------------------------------------------------------------------------
// Whole player
// ---------------------------------------------------------------------------

/// Everything about a player that the cost projection reads. A tree that is
/// null or not an object reads as all-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionState {
    #[serde(deserialize_with = "lenient_record")]
    pub t10: UnlockLevels,
    #[serde(deserialize_with = "lenient_record")]
    pub perks: PerkLevels,
    #[serde(deserialize_with = "lenient_record")]
    pub mastery: MasteryTrees,
}
