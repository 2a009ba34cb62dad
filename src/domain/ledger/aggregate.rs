//! Payment ledger - contribution records keyed by (cycle, member, day).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Amount, CycleId, MemberId, Timestamp};

use super::key::PaymentKey;

/// A recorded contribution: the amount and when it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    amount: Amount,
    timestamp: Timestamp,
}

impl PaymentRecord {
    pub fn new(amount: Amount, timestamp: Timestamp) -> Self {
        Self { amount, timestamp }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

/// All recorded contributions for the group.
///
/// One entry per (cycle, member, day) slot. Recording into an occupied
/// slot replaces the previous entry; amounts never accumulate per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentLedger {
    entries: BTreeMap<PaymentKey, PaymentRecord>,
}

impl PaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contribution, returning the entry it replaced, if any.
    pub fn record(&mut self, key: PaymentKey, record: PaymentRecord) -> Option<PaymentRecord> {
        self.entries.insert(key, record)
    }

    pub fn get(&self, key: &PaymentKey) -> Option<&PaymentRecord> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> &BTreeMap<PaymentKey, PaymentRecord> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sums the recorded contributions for one cycle.
    ///
    /// Only slots belonging to a known member and a day within the cycle
    /// duration count; anything recorded outside that grid is ignored.
    pub fn collected_total(
        &self,
        cycle: CycleId,
        members: &[MemberId],
        duration_days: u16,
    ) -> Amount {
        members
            .iter()
            .flat_map(|member| {
                (1..=duration_days).map(move |day| PaymentKey::new(cycle, *member, day))
            })
            .filter_map(|key| self.entries.get(&key))
            .map(|record| record.amount())
            .sum()
    }
}
