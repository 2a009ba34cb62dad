//! In-memory store - port implementations without disk persistence.
//!
//! Backs handler unit tests and ephemeral runs. Same contract as the
//! file-backed store, including monotonic member id assignment.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::cycle::Cycle;
use crate::domain::foundation::{MemberId, Timestamp};
use crate::domain::group::{GroupConfig, Member, MemberPatch, NewMember};
use crate::domain::ledger::{PaymentKey, PaymentLedger, PaymentRecord};
use crate::ports::{GroupStore, MemberDirectory, StoreError};

#[derive(Debug)]
struct State {
    next_member_id: u32,
    members: Vec<Member>,
    cycles: Vec<Cycle>,
    ledger: PaymentLedger,
    config: GroupConfig,
}

/// Volatile store holding all four collections behind one lock.
#[derive(Debug)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    /// Creates a store seeded with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GroupConfig::default())
    }

    /// Creates a store seeded with the given configuration.
    pub fn with_config(config: GroupConfig) -> Self {
        Self {
            state: RwLock::new(State {
                next_member_id: 1,
                members: Vec::new(),
                cycles: Vec::new(),
                ledger: PaymentLedger::new(),
                config,
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupStore for InMemoryStore {
    async fn load_config(&self) -> Result<GroupConfig, StoreError> {
        Ok(self.state.read().await.config.clone())
    }

    async fn save_config(&self, config: &GroupConfig) -> Result<(), StoreError> {
        self.state.write().await.config = config.clone();
        Ok(())
    }

    async fn load_cycles(&self) -> Result<Vec<Cycle>, StoreError> {
        Ok(self.state.read().await.cycles.clone())
    }

    async fn replace_cycles(&self, cycles: &[Cycle]) -> Result<(), StoreError> {
        self.state.write().await.cycles = cycles.to_vec();
        Ok(())
    }

    async fn load_ledger(&self) -> Result<PaymentLedger, StoreError> {
        Ok(self.state.read().await.ledger.clone())
    }

    async fn record_payment(
        &self,
        key: PaymentKey,
        record: PaymentRecord,
    ) -> Result<(), StoreError> {
        self.state.write().await.ledger.record(key, record);
        Ok(())
    }

    async fn save_rotation(
        &self,
        cycles: &[Cycle],
        config: &GroupConfig,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.cycles = cycles.to_vec();
        state.config = config.clone();
        Ok(())
    }
}

#[async_trait]
impl MemberDirectory for InMemoryStore {
    async fn list(&self) -> Result<Vec<Member>, StoreError> {
        Ok(self.state.read().await.members.clone())
    }

    async fn find(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .members
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    async fn insert(&self, details: NewMember) -> Result<Member, StoreError> {
        let mut state = self.state.write().await;
        let member = Member::new(MemberId::new(state.next_member_id), details, Timestamp::now());
        state.next_member_id += 1;
        state.members.push(member.clone());
        Ok(member)
    }

    async fn update(
        &self,
        id: MemberId,
        patch: MemberPatch,
    ) -> Result<Option<Member>, StoreError> {
        let mut state = self.state.write().await;
        match state.members.iter_mut().find(|m| m.id() == id) {
            Some(member) => {
                member.apply_patch(patch);
                Ok(Some(member.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: MemberId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        match state.members.iter().position(|m| m.id() == id) {
            Some(position) => {
                state.members.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
