//! GetStatsHandler - Query handler for the group overview.
//!
//! Assembles the dashboard snapshot from all four collections. Read-only;
//! succeeds in every group state, including the finished rotation where no
//! cycle is active any more.

use std::sync::Arc;

use crate::domain::stats::GroupStats;
use crate::ports::{GroupStore, MemberDirectory, StoreError};

/// Handler computing the group overview snapshot.
pub struct GetStatsHandler {
    store: Arc<dyn GroupStore>,
    members: Arc<dyn MemberDirectory>,
}

impl GetStatsHandler {
    pub fn new(store: Arc<dyn GroupStore>, members: Arc<dyn MemberDirectory>) -> Self {
        Self { store, members }
    }

    pub async fn handle(&self) -> Result<GroupStats, StoreError> {
        let members = self.members.list().await?;
        let cycles = self.store.load_cycles().await?;
        let ledger = self.store.load_ledger().await?;
        let config = self.store.load_config().await?;

        Ok(GroupStats::compute(&members, &cycles, &ledger, &config))
    }
}
