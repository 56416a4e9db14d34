//! Static cost tables.
//!
//! Every table is `const` data. Curves are indexed by the level being paid
//! for minus one: entry `i` is the price of going from level `i` to `i + 1`,
//! so a node at level `n` still owes entries `n..`.
//!
//! The perk tiers are authored as three price bands plus exact per-level
//! overrides and are resolved into ten plain entries at compile time.

use crate::resource::ResourceCost;

const fn rc(gold: u64, valor: u64, food_iron: u64) -> ResourceCost {
    ResourceCost::new(gold, valor, food_iron)
}

/// A building step is paid in food/iron and gold only.
const fn step(food_iron: u64, gold: u64) -> ResourceCost {
    ResourceCost::new(gold, 0, food_iron)
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Cap for every ten-level node (T10 stats, perk nodes, mastery stat nodes).
pub const STAT_NODE_MAX: u8 = 10;

/// Cap for the mastery damage and march-size nodes.
pub const SPECIAL_NODE_MAX: u8 = 5;

/// Value of the T10 elite flag once unlocked.
pub const ELITE_UNLOCKED: u8 = 10;

/// Value of the binary perk node once unlocked.
pub const PERK_UNLOCKED: u8 = 1;

/// Barracks and tech center only count toward T10 up to this level.
pub const BUILDING_TARGET_LEVEL: usize = 30;

/// Highest level either building can reach in game.
pub const BUILDING_MAX_LEVEL: u8 = 35;

// ---------------------------------------------------------------------------
// T10 unlock tree
// ---------------------------------------------------------------------------

/// Advanced protection.
pub const ADV_PROT: [ResourceCost; 10] = [
    rc(21_000_000, 1_100, 24_000_000),
    rc(23_500_000, 1_200, 27_000_000),
    rc(26_000_000, 1_300, 30_000_000),
    rc(29_000_000, 1_450, 33_500_000),
    rc(32_000_000, 1_600, 37_000_000),
    rc(35_500_000, 1_750, 41_000_000),
    rc(39_000_000, 1_900, 45_000_000),
    rc(43_000_000, 2_100, 49_500_000),
    rc(47_500_000, 2_300, 54_500_000),
    rc(52_000_000, 2_500, 60_000_000),
];

/// Shared by the hp, attack, and defense boosts.
pub const BOOST3: [ResourceCost; 10] = [
    rc(14_000_000, 700, 16_000_000),
    rc(15_500_000, 780, 17_800_000),
    rc(17_200_000, 860, 19_800_000),
    rc(19_000_000, 950, 21_900_000),
    rc(21_000_000, 1_050, 24_200_000),
    rc(23_200_000, 1_160, 26_700_000),
    rc(25_600_000, 1_280, 29_500_000),
    rc(28_300_000, 1_410, 32_600_000),
    rc(31_200_000, 1_560, 36_000_000),
    rc(34_500_000, 1_720, 39_700_000),
];

/// Paid once, in full, to unlock the elite unit.
pub const ELITE_UNLOCK: ResourceCost = rc(180_000_000, 8_000, 210_000_000);

/// Barracks upgrade from level `i` to `i + 1`, up to the target level.
pub const BARRACKS: [ResourceCost; BUILDING_TARGET_LEVEL] = [
    step(120_000, 50_000),
    step(143_000, 60_000),
    step(170_000, 71_000),
    step(202_000, 85_000),
    step(241_000, 101_000),
    step(286_000, 120_000),
    step(341_000, 143_000),
    step(406_000, 171_000),
    step(483_000, 203_000),
    step(574_000, 241_000),
    // 10
    step(683_000, 287_000),
    step(813_000, 341_000),
    step(968_000, 407_000),
    step(1_152_000, 484_000),
    step(1_370_000, 575_000),
    step(1_631_000, 685_000),
    step(1_941_000, 815_000),
    step(2_309_000, 970_000),
    step(2_748_000, 1_154_000),
    step(3_270_000, 1_373_000),
    // 20
    step(3_892_000, 1_635_000),
    step(4_631_000, 1_945_000),
    step(5_511_000, 2_315_000),
    step(6_558_000, 2_754_000),
    step(7_804_000, 3_278_000),
    step(9_287_000, 3_901_000),
    step(11_051_000, 4_641_000),
    step(13_151_000, 5_523_000),
    step(15_649_000, 6_573_000),
    step(18_623_000, 7_822_000),
];

/// Tech center upgrade from level `i` to `i + 1`, up to the target level.
pub const TECH_CENTER: [ResourceCost; BUILDING_TARGET_LEVEL] = [
    step(150_000, 75_000),
    step(180_000, 90_000),
    step(216_000, 108_000),
    step(259_000, 130_000),
    step(311_000, 156_000),
    step(373_000, 186_000),
    step(448_000, 224_000),
    step(537_000, 268_000),
    step(645_000, 322_000),
    step(774_000, 387_000),
    // 10
    step(929_000, 464_000),
    step(1_115_000, 558_000),
    step(1_337_000, 668_000),
    step(1_605_000, 802_000),
    step(1_926_000, 963_000),
    step(2_311_000, 1_156_000),
    step(2_773_000, 1_386_000),
    step(3_328_000, 1_664_000),
    step(3_993_000, 1_996_000),
    step(4_792_000, 2_396_000),
    // 20
    step(5_751_000, 2_876_000),
    step(6_901_000, 3_450_000),
    step(8_281_000, 4_140_000),
    step(9_937_000, 4_968_000),
    step(11_925_000, 5_962_000),
    step(14_309_000, 7_154_000),
    step(17_171_000, 8_586_000),
    step(20_606_000, 10_303_000),
    step(24_727_000, 12_364_000),
    step(29_672_000, 14_836_000),
];

// ---------------------------------------------------------------------------
// STS perk tree
// ---------------------------------------------------------------------------

/// A perk tier as authored: one price per level band, with exact prices for
/// individual levels taking precedence over their band.
#[derive(Debug, Clone, Copy)]
pub struct TierBands {
    pub lv1_3: ResourceCost,
    pub lv4_6: ResourceCost,
    pub lv7_10: ResourceCost,
    /// `(level, cost)` pairs, levels 1-based.
    pub overrides: &'static [(u8, ResourceCost)],
    /// Flat cost of the binary node priced from this tier, if any.
    pub unlock: Option<ResourceCost>,
}

impl TierBands {
    /// Price of reaching `level` (1-based).
    pub const fn price(&self, level: u8) -> ResourceCost {
        let mut i = 0;
        while i < self.overrides.len() {
            let (lv, cost) = self.overrides[i];
            if lv == level {
                return cost;
            }
            i += 1;
        }
        if level <= 3 {
            self.lv1_3
        } else if level <= 6 {
            self.lv4_6
        } else {
            self.lv7_10
        }
    }

    /// Expand into ten per-level entries.
    pub const fn resolve(&self) -> [ResourceCost; 10] {
        let mut out = [ResourceCost::ZERO; 10];
        let mut i = 0;
        while i < out.len() {
            out[i] = self.price(i as u8 + 1);
            i += 1;
        }
        out
    }
}

pub const TIER_A_BANDS: TierBands = TierBands {
    lv1_3: rc(300_000, 15, 360_000),
    lv4_6: rc(600_000, 30, 720_000),
    lv7_10: rc(1_000_000, 50, 1_200_000),
    overrides: &[(10, rc(1_500_000, 80, 1_800_000))],
    unlock: None,
};

pub const TIER_B_BANDS: TierBands = TierBands {
    lv1_3: rc(450_000, 20, 540_000),
    lv4_6: rc(900_000, 40, 1_080_000),
    lv7_10: rc(1_500_000, 70, 1_800_000),
    overrides: &[],
    unlock: Some(rc(5_000_000, 200, 6_000_000)),
};

pub const TIER_C_BANDS: TierBands = TierBands {
    lv1_3: rc(800_000, 35, 960_000),
    lv4_6: rc(1_600_000, 70, 1_920_000),
    lv7_10: rc(2_800_000, 120, 3_360_000),
    overrides: &[
        (9, rc(3_400_000, 150, 4_080_000)),
        (10, rc(4_200_000, 180, 5_040_000)),
    ],
    unlock: None,
};

pub const TIER_D_BANDS: TierBands = TierBands {
    lv1_3: rc(1_200_000, 50, 1_440_000),
    lv4_6: rc(2_400_000, 100, 2_880_000),
    lv7_10: rc(4_000_000, 170, 4_800_000),
    overrides: &[(10, rc(6_000_000, 250, 7_200_000))],
    unlock: None,
};

pub const TIER_E_BANDS: TierBands = TierBands {
    lv1_3: rc(2_000_000, 80, 2_400_000),
    lv4_6: rc(3_800_000, 150, 4_560_000),
    lv7_10: rc(6_500_000, 260, 7_800_000),
    overrides: &[
        (8, rc(7_200_000, 290, 8_640_000)),
        (9, rc(8_000_000, 320, 9_600_000)),
        (10, rc(9_500_000, 380, 11_400_000)),
    ],
    unlock: None,
};

pub const TIER_A: [ResourceCost; 10] = TIER_A_BANDS.resolve();
pub const TIER_B: [ResourceCost; 10] = TIER_B_BANDS.resolve();
pub const TIER_C: [ResourceCost; 10] = TIER_C_BANDS.resolve();
pub const TIER_D: [ResourceCost; 10] = TIER_D_BANDS.resolve();
pub const TIER_E: [ResourceCost; 10] = TIER_E_BANDS.resolve();

/// Flat cost of the binary perk node, carried by tier B.
pub const PERK_UNLOCK: ResourceCost = match TIER_B_BANDS.unlock {
    Some(cost) => cost,
    None => ResourceCost::ZERO,
};

// ---------------------------------------------------------------------------
// Mastery trees
// ---------------------------------------------------------------------------

/// Shared by every stat node of every mastery tree.
pub const MASTERY_STAT: [ResourceCost; 10] = [
    rc(500_000, 25, 600_000),
    rc(750_000, 35, 900_000),
    rc(1_000_000, 50, 1_200_000),
    rc(1_400_000, 70, 1_700_000),
    rc(1_900_000, 95, 2_300_000),
    rc(2_500_000, 125, 3_000_000),
    rc(3_200_000, 160, 3_800_000),
    rc(4_000_000, 200, 4_800_000),
    rc(5_000_000, 250, 6_000_000),
    rc(6_200_000, 310, 7_400_000),
];

/// Shared by every damage and march-size node.
pub const MASTERY_SPECIAL: [ResourceCost; 5] = [
    rc(2_000_000, 100, 2_400_000),
    rc(3_500_000, 175, 4_200_000),
    rc(5_500_000, 275, 6_600_000),
    rc(8_000_000, 400, 9_600_000),
    rc(11_000_000, 550, 13_200_000),
];
