//! Amount value object for whole-unit contribution money.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount of money in whole currency units.
///
/// Contributions are tracked in integral units; sub-unit precision is
/// out of scope for the group ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from whole units.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner value in whole units.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns true if this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the amount by a count, saturating on overflow.
    pub fn times(&self, count: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(count)))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn amounts_add() {
        assert_eq!(Amount::new(2000) + Amount::new(500), Amount::new(2500));
    }

    #[test]
    fn amounts_sum_over_iterator() {
        let total: Amount = vec![Amount::new(100), Amount::new(200), Amount::new(300)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::new(600));
    }

    #[test]
    fn times_multiplies_by_count() {
        assert_eq!(Amount::new(2000).times(10), Amount::new(20000));
    }

    #[test]
    fn times_saturates_instead_of_overflowing() {
        assert_eq!(Amount::new(u64::MAX).times(2), Amount::new(u64::MAX));
    }

    #[test]
    fn amounts_order_numerically() {
        assert!(Amount::new(19999) < Amount::new(20000));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Amount::new(2000)).unwrap();
        assert_eq!(json, "2000");
    }

    #[test]
    fn deserializes_from_json_number() {
        let amount: Amount = serde_json::from_str("1500").unwrap();
        assert_eq!(amount, Amount::new(1500));
    }
}
