//! Composite key identifying one contribution slot.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CycleId, MemberId, ValidationError};

/// Identifies the contribution of one member on one day of one cycle.
///
/// On the wire and on disk the key is the string `"cycle-member-day"`,
/// which is also how the ledger map is keyed in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaymentKey {
    cycle: CycleId,
    member: MemberId,
    day: u16,
}

impl PaymentKey {
    pub fn new(cycle: CycleId, member: MemberId, day: u16) -> Self {
        Self { cycle, member, day }
    }

    pub fn cycle(&self) -> CycleId {
        self.cycle
    }

    pub fn member(&self) -> MemberId {
        self.member
    }

    pub fn day(&self) -> u16 {
        self.day
    }
}

impl fmt::Display for PaymentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.cycle, self.member, self.day)
    }
}

impl FromStr for PaymentKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ValidationError::invalid_format("paymentKey", "expected \"cycle-member-day\"")
        };

        let mut parts = s.split('-');
        let cycle = parts.next().ok_or_else(invalid)?;
        let member = parts.next().ok_or_else(invalid)?;
        let day = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            cycle: cycle.parse().map_err(|_| invalid())?,
            member: member.parse().map_err(|_| invalid())?,
            day: day.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for PaymentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PaymentKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
