use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// The three currencies every upgrade is paid in.
///
/// All arithmetic saturates, so summing arbitrarily many table entries can
/// never wrap or panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCost {
    pub gold: u64,
    pub valor: u64,
    pub food_iron: u64,
}

impl ResourceCost {
    pub const ZERO: ResourceCost = ResourceCost::new(0, 0, 0);

    pub const fn new(gold: u64, valor: u64, food_iron: u64) -> Self {
        Self {
            gold,
            valor,
            food_iron,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.gold == 0 && self.valor == 0 && self.food_iron == 0
    }

    pub const fn saturating_add(self, other: ResourceCost) -> ResourceCost {
        ResourceCost {
            gold: self.gold.saturating_add(other.gold),
            valor: self.valor.saturating_add(other.valor),
            food_iron: self.food_iron.saturating_add(other.food_iron),
        }
    }

    /// Component-wise difference, clamped at zero.
    pub const fn saturating_sub(self, other: ResourceCost) -> ResourceCost {
        ResourceCost {
            gold: self.gold.saturating_sub(other.gold),
            valor: self.valor.saturating_sub(other.valor),
            food_iron: self.food_iron.saturating_sub(other.food_iron),
        }
    }

    pub const fn saturating_mul(self, factor: u64) -> ResourceCost {
        ResourceCost {
            gold: self.gold.saturating_mul(factor),
            valor: self.valor.saturating_mul(factor),
            food_iron: self.food_iron.saturating_mul(factor),
        }
    }
}

impl Add for ResourceCost {
    type Output = ResourceCost;

    fn add(self, rhs: ResourceCost) -> ResourceCost {
        self.saturating_add(rhs)
    }
}

impl AddAssign for ResourceCost {
    fn add_assign(&mut self, rhs: ResourceCost) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for ResourceCost {
    fn sum<I: Iterator<Item = ResourceCost>>(iter: I) -> Self {
        iter.fold(ResourceCost::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a ResourceCost> for ResourceCost {
    fn sum<I: Iterator<Item = &'a ResourceCost>>(iter: I) -> Self {
        iter.fold(ResourceCost::ZERO, |acc, c| acc + *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero() {
        assert!(ResourceCost::ZERO.is_zero());
        assert!(!ResourceCost::new(0, 1, 0).is_zero());
        assert_eq!(ResourceCost::default(), ResourceCost::ZERO);
    }

    #[test]
    fn add_is_component_wise() {
        let a = ResourceCost::new(1, 2, 3);
        let b = ResourceCost::new(10, 20, 30);
        assert_eq!(a + b, ResourceCost::new(11, 22, 33));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn add_saturates_instead_of_wrapping() {
        let big = ResourceCost::new(u64::MAX, 1, 0);
        let sum = big + ResourceCost::new(5, 1, 0);
        assert_eq!(sum, ResourceCost::new(u64::MAX, 2, 0));
    }

    #[test]
    fn sub_clamps_at_zero() {
        let a = ResourceCost::new(5, 5, 5);
        let b = ResourceCost::new(10, 2, 5);
        assert_eq!(a.saturating_sub(b), ResourceCost::new(0, 3, 0));
    }

    #[test]
    fn sum_over_owned_and_borrowed() {
        let costs = [
            ResourceCost::new(1, 0, 1),
            ResourceCost::new(2, 1, 0),
            ResourceCost::new(3, 0, 4),
        ];
        let borrowed: ResourceCost = costs.iter().sum();
        let owned: ResourceCost = costs.into_iter().sum();
        assert_eq!(borrowed, ResourceCost::new(6, 1, 5));
        assert_eq!(borrowed, owned);

        let empty: ResourceCost = std::iter::empty::<ResourceCost>().sum();
        assert_eq!(empty, ResourceCost::ZERO);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&ResourceCost::new(7, 8, 9)).unwrap();
        assert_eq!(json, r#"{"gold":7,"valor":8,"foodIron":9}"#);

        let back: ResourceCost = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResourceCost::new(7, 8, 9));
    }
}
