//! Beneficiary draw - random assignment of members to cycle slots.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::foundation::MemberId;

use super::aggregate::Cycle;

/// Produces a uniformly random ordering of the member identifiers.
///
/// Fisher-Yates via `SliceRandom::shuffle`, so every permutation is
/// equally likely. The rng is injected; production callers pass an
/// entropy-seeded generator, tests pass a fixed seed.
pub fn draw_order<R: Rng + ?Sized>(members: &[MemberId], rng: &mut R) -> Vec<MemberId> {
    let mut order = members.to_vec();
    order.shuffle(rng);
    order
}

/// Pairs the drawn order with the schedule: the member at position i
/// becomes the beneficiary of the cycle at position i.
///
/// Surplus cycles keep their existing (unassigned) beneficiary; surplus
/// members simply never get a slot.
pub fn assign_beneficiaries(cycles: &mut [Cycle], order: &[MemberId]) {
    for (cycle, member) in cycles.iter_mut().zip(order.iter()) {
        cycle.assign_beneficiary(*member);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::schedule;
    use crate::domain::foundation::Amount;
    use crate::domain::group::GroupConfig;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn members(count: u32) -> Vec<MemberId> {
        (1..=count).map(MemberId::new).collect()
    }

    #[test]
    fn drawn_order_is_a_permutation_of_the_members() {
        let input = members(10);
        let mut rng = StdRng::seed_from_u64(7);

        let order = draw_order(&input, &mut rng);

        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, input);
    }

    #[test]
    fn same_seed_draws_the_same_order() {
        let input = members(10);

        let first = draw_order(&input, &mut StdRng::seed_from_u64(42));
        let second = draw_order(&input, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn repeated_draws_produce_different_orders() {
        let input = members(5);
        let mut rng = StdRng::seed_from_u64(1);

        let seen: HashSet<Vec<MemberId>> =
            (0..50).map(|_| draw_order(&input, &mut rng)).collect();

        assert!(seen.len() > 1);
    }

    #[test]
    fn draw_of_empty_member_set_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(draw_order(&[], &mut rng).is_empty());
    }

    #[test]
    fn assignment_pairs_members_with_cycles_by_position() {
        let config = GroupConfig::new(
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            3,
            Amount::new(1000),
            10,
        )
        .unwrap();
        let mut cycles = schedule::generate(&config).unwrap();
        let order = vec![MemberId::new(2), MemberId::new(3), MemberId::new(1)];

        assign_beneficiaries(&mut cycles, &order);

        assert_eq!(cycles[0].beneficiary_id(), Some(MemberId::new(2)));
        assert_eq!(cycles[1].beneficiary_id(), Some(MemberId::new(3)));
        assert_eq!(cycles[2].beneficiary_id(), Some(MemberId::new(1)));
    }

    #[test]
    fn surplus_cycles_stay_unassigned() {
        let config = GroupConfig::new(
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            4,
            Amount::new(1000),
            10,
        )
        .unwrap();
        let mut cycles = schedule::generate(&config).unwrap();
        let order = vec![MemberId::new(1), MemberId::new(2)];

        assign_beneficiaries(&mut cycles, &order);

        assert_eq!(cycles[1].beneficiary_id(), Some(MemberId::new(2)));
        assert_eq!(cycles[2].beneficiary_id(), None);
        assert_eq!(cycles[3].beneficiary_id(), None);
    }

    proptest! {
        #[test]
        fn shuffle_never_loses_or_duplicates_members(count in 0u32..40, seed in any::<u64>()) {
            let input = members(count);
            let mut rng = StdRng::seed_from_u64(seed);

            let order = draw_order(&input, &mut rng);

            let mut sorted = order;
            sorted.sort();
            prop_assert_eq!(sorted, input);
        }
    }
}
