//! GUN1 Core -- the upgrade cost projection engine.
//!
//! Given a player's current levels across the four upgrade trees, this
//! crate computes exactly how much gold, valor, and food/iron is still
//! needed to max each tree. Everything is pure and table-driven: no I/O,
//! no shared mutable state, and no failure modes.
//!
//! # Trees
//!
//! - **T10** ([`progression::UnlockLevels`]) -- four parallel stat nodes,
//!   the elite unlock flag, and the barracks/tech center buildings up to
//!   level 30.
//! - **STS perks** ([`progression::PerkLevels`]) -- sixteen nodes priced
//!   from five tier-banded tables plus one flat binary unlock.
//! - **Mastery** ([`progression::MasteryLevels`]) -- air, tank, and missile
//!   trees, each with sixteen stat nodes and four special nodes sharing two
//!   universal cost curves.
//!
//! # Permissive input
//!
//! Every level is a [`level::Level`], whose `Deserialize` impl coerces
//! missing or malformed values to zero. A half-filled record therefore
//! projects as "no progress" on the missing nodes instead of failing:
//!
//! ```rust
//! use gun1_core::progression::UnlockLevels;
//! use gun1_core::projection::project_unlock_tree_cost;
//!
//! let t10: UnlockLevels = serde_json::from_str(r#"{"protection": "oops"}"#).unwrap();
//! assert_eq!(project_unlock_tree_cost(&t10), project_unlock_tree_cost(&UnlockLevels::default()));
//! ```
//!
//! # Key Types
//!
//! - [`resource::ResourceCost`] -- the `{gold, valor, foodIron}` triple.
//! - [`tables`] -- const cost curves, resolved at compile time.
//! - [`projection`] -- per-tree projection functions and
//!   [`projection::ProjectionReport`].
//! - [`fixed::completion`] -- Q32.32 progress fraction for progress bars.

pub mod fixed;
pub mod level;
pub mod progression;
pub mod projection;
pub mod resource;
pub mod tables;

pub use level::Level;
pub use progression::{
    MasteryLevels, MasteryTree, MasteryTrees, PerkLevels, ProgressionState, UnlockLevels,
};
pub use projection::{
    ProjectionReport, project_mastery_tree_cost, project_perk_tree_cost, project_progression,
    project_unlock_tree_cost,
};
pub use resource::ResourceCost;
