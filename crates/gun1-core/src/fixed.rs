use crate::resource::ResourceCost;
use fixed::types::I32F32;

/// Q32.32 fixed-point: 32 integer bits, 32 fractional bits.
pub type Fixed64 = I32F32;

/// Convert Fixed64 to f64. Use only for display, never for ranking.
#[inline]
pub fn fixed64_to_f64(v: Fixed64) -> f64 {
    v.to_num::<f64>()
}

/// Exact `done / total` as Q32.32 for `done <= total`, `total > 0`.
fn ratio(done: u64, total: u64) -> Fixed64 {
    let bits = ((u128::from(done)) << 32) / u128::from(total);
    Fixed64::from_bits(bits as i64)
}

/// Fraction of a tree already paid for, in `[0, 1]`.
///
/// Measured on gold when the tree costs any gold, otherwise on food/iron,
/// otherwise on valor. A tree with nothing to pay is complete.
pub fn completion(remaining: ResourceCost, full: ResourceCost) -> Fixed64 {
    let (left, total) = if full.gold > 0 {
        (remaining.gold, full.gold)
    } else if full.food_iron > 0 {
        (remaining.food_iron, full.food_iron)
    } else if full.valor > 0 {
        (remaining.valor, full.valor)
    } else {
        return Fixed64::ONE;
    };
    let left = left.min(total);
    ratio(total - left, total)
}

/// [`completion`] as a whole percentage, rounded down. For progress bars.
pub fn completion_percent(remaining: ResourceCost, full: ResourceCost) -> u8 {
    let pct = completion(remaining, full) * Fixed64::from_num(100);
    pct.floor().to_num::<i64>().clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_paid_is_zero() {
        let full = ResourceCost::new(1_000, 10, 2_000);
        assert_eq!(completion(full, full), Fixed64::ZERO);
        assert_eq!(completion_percent(full, full), 0);
    }

    #[test]
    fn everything_paid_is_one() {
        let full = ResourceCost::new(1_000, 10, 2_000);
        assert_eq!(completion(ResourceCost::ZERO, full), Fixed64::ONE);
        assert_eq!(completion_percent(ResourceCost::ZERO, full), 100);
    }

    #[test]
    fn halfway_on_gold() {
        let full = ResourceCost::new(1_000, 10, 2_000);
        let remaining = ResourceCost::new(500, 10, 2_000);
        assert_eq!(completion(remaining, full), Fixed64::from_num(0.5));
        assert_eq!(fixed64_to_f64(completion(remaining, full)), 0.5);
    }

    #[test]
    fn falls_back_to_other_axes_without_gold() {
        let full = ResourceCost::new(0, 40, 400);
        let remaining = ResourceCost::new(0, 40, 100);
        assert_eq!(completion(remaining, full), Fixed64::from_num(0.75));

        let full = ResourceCost::new(0, 40, 0);
        let remaining = ResourceCost::new(0, 10, 0);
        assert_eq!(completion(remaining, full), Fixed64::from_num(0.75));
    }

    #[test]
    fn free_tree_is_complete() {
        assert_eq!(completion(ResourceCost::ZERO, ResourceCost::ZERO), Fixed64::ONE);
    }

    #[test]
    fn remaining_above_full_clamps_to_zero() {
        let full = ResourceCost::new(100, 0, 0);
        let remaining = ResourceCost::new(250, 0, 0);
        assert_eq!(completion(remaining, full), Fixed64::ZERO);
    }

    #[test]
    fn large_totals_do_not_overflow() {
        let full = ResourceCost::new(u64::MAX, 0, 0);
        let remaining = ResourceCost::new(u64::MAX / 4, 0, 0);
        let done = fixed64_to_f64(completion(remaining, full));
        assert!((done - 0.75).abs() < 1e-6);
    }

    #[test]
    fn percent_rounds_down() {
        let full = ResourceCost::new(3, 0, 0);
        let remaining = ResourceCost::new(1, 0, 0);
        assert_eq!(completion_percent(remaining, full), 66);
    }
}
