use serde::Serialize;

use crate::domain::cycle::Cycle;
use crate::domain::foundation::{Amount, CycleId, MemberId};
use crate::domain::group::{GroupConfig, Member};
use crate::domain::ledger::PaymentLedger;

/// The group dashboard rollup - how far the current cycle has come.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub total_members: u32,
    pub current_cycle: CycleId,
    pub completed_cycles: u32,
    /// Collected total for the current cycle only.
    pub total_collected: Amount,
    pub target_amount: Amount,
    /// Collection progress for the current cycle, 0-100 (may exceed 100
    /// on overpayment; 0 when the target is zero).
    pub progress: f64,
    pub beneficiary_order: Vec<MemberId>,
}

impl GroupStats {
    /// Computes the rollup from snapshots of the four collections.
    pub fn compute(
        members: &[Member],
        cycles: &[Cycle],
        ledger: &PaymentLedger,
        config: &GroupConfig,
    ) -> Self {
        let member_ids: Vec<MemberId> = members.iter().map(|m| m.id()).collect();
        let total_collected = ledger.collected_total(
            config.current_cycle(),
            &member_ids,
            config.cycle_duration(),
        );
        let target_amount = config.target_amount();
        let progress = if target_amount.is_zero() {
            0.0
        } else {
            total_collected.value() as f64 / target_amount.value() as f64 * 100.0
        };

        Self {
            total_members: members.len() as u32,
            current_cycle: config.current_cycle(),
            completed_cycles: cycles.iter().filter(|c| c.is_completed()).count() as u32,
            total_collected,
            target_amount,
            progress,
            beneficiary_order: config.beneficiary_order().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::schedule;
    use crate::domain::foundation::Timestamp;
    use crate::domain::group::NewMember;
    use crate::domain::ledger::{PaymentKey, PaymentRecord};
    use chrono::NaiveDate;

    fn members(count: u32) -> Vec<Member> {
        (1..=count)
            .map(|i| {
                Member::new(
                    MemberId::new(i),
                    NewMember::new(format!("Member {}", i), None).unwrap(),
                    Timestamp::now(),
                )
            })
            .collect()
    }

    fn config(member_count: u32, cycle_amount: u64) -> GroupConfig {
        GroupConfig::new(
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            member_count,
            Amount::new(cycle_amount),
            10,
        )
        .unwrap()
    }

    #[test]
    fn computes_rollup_for_fresh_group() {
        let config = config(10, 2000);
        let cycles = schedule::generate(&config).unwrap();
        let stats = GroupStats::compute(&members(10), &cycles, &PaymentLedger::new(), &config);

        assert_eq!(stats.total_members, 10);
        assert_eq!(stats.current_cycle, CycleId::new(1));
        assert_eq!(stats.completed_cycles, 0);
        assert_eq!(stats.total_collected, Amount::ZERO);
        assert_eq!(stats.target_amount, Amount::new(20000));
        assert_eq!(stats.progress, 0.0);
        assert!(stats.beneficiary_order.is_empty());
    }

    #[test]
    fn counts_only_current_cycle_payments() {
        let config = config(2, 1000);
        let cycles = schedule::generate(&config).unwrap();
        let mut ledger = PaymentLedger::new();
        ledger.record(
            PaymentKey::new(CycleId::new(1), MemberId::new(1), 1),
            PaymentRecord::new(Amount::new(1000), Timestamp::now()),
        );
        ledger.record(
            PaymentKey::new(CycleId::new(2), MemberId::new(1), 1),
            PaymentRecord::new(Amount::new(500), Timestamp::now()),
        );

        let stats = GroupStats::compute(&members(2), &cycles, &ledger, &config);

        assert_eq!(stats.total_collected, Amount::new(1000));
        assert_eq!(stats.progress, 50.0);
    }

    #[test]
    fn counts_completed_cycles() {
        let config = config(3, 1000);
        let mut cycles = schedule::generate(&config).unwrap();
        cycles[0]
            .complete(Amount::new(3000), Timestamp::now())
            .unwrap();

        let stats = GroupStats::compute(&members(3), &cycles, &PaymentLedger::new(), &config);

        assert_eq!(stats.completed_cycles, 1);
    }

    #[test]
    fn zero_target_yields_zero_progress() {
        // hand-edited config with zero members bypasses construction checks
        let json = r#"{
            "startDate": "2026-02-01",
            "memberCount": 0,
            "cycleAmount": 2000,
            "cycleDuration": 10,
            "currentCycle": 1
        }"#;
        let config: GroupConfig = serde_json::from_str(json).unwrap();

        let stats = GroupStats::compute(&[], &[], &PaymentLedger::new(), &config);

        assert_eq!(stats.progress, 0.0);
        assert!(stats.progress.is_finite());
    }

    #[test]
    fn overpayment_pushes_progress_past_one_hundred() {
        let config = config(1, 1000);
        let cycles = schedule::generate(&config).unwrap();
        let mut ledger = PaymentLedger::new();
        ledger.record(
            PaymentKey::new(CycleId::new(1), MemberId::new(1), 1),
            PaymentRecord::new(Amount::new(1500), Timestamp::now()),
        );

        let stats = GroupStats::compute(&members(1), &cycles, &ledger, &config);

        assert_eq!(stats.progress, 150.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let config = config(2, 1000);
        let cycles = schedule::generate(&config).unwrap();
        let stats = GroupStats::compute(&members(2), &cycles, &PaymentLedger::new(), &config);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalMembers"], 2);
        assert_eq!(json["currentCycle"], 1);
        assert_eq!(json["completedCycles"], 0);
        assert_eq!(json["totalCollected"], 0);
        assert_eq!(json["targetAmount"], 2000);
        assert_eq!(json["progress"], 0.0);
        assert!(json["beneficiaryOrder"].is_array());
    }
}
