//! JSON file store - rotation state persisted as pretty-printed JSON.
//!
//! One file per collection under a data directory: `members.json`,
//! `cycles.json`, `payments.json` and `config.json`. Missing files are
//! seeded on open so a fresh directory boots into a usable group.
//!
//! All reads are served from memory; every mutation rewrites the affected
//! file before the in-memory copy is committed, so the cached state never
//! runs ahead of what survived a crash.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::cycle::Cycle;
use crate::domain::foundation::{MemberId, Timestamp};
use crate::domain::group::{GroupConfig, Member, MemberPatch, NewMember};
use crate::domain::ledger::{PaymentKey, PaymentLedger, PaymentRecord};
use crate::ports::{GroupStore, MemberDirectory, StoreError};

const MEMBERS_FILE: &str = "members.json";
const CYCLES_FILE: &str = "cycles.json";
const PAYMENTS_FILE: &str = "payments.json";
const CONFIG_FILE: &str = "config.json";

/// Member roster plus the id counter, persisted as one document so the
/// counter survives restarts and removed ids are never handed out again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberRoster {
    next_id: u32,
    members: Vec<Member>,
}

impl Default for MemberRoster {
    fn default() -> Self {
        Self {
            next_id: 1,
            members: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct State {
    roster: MemberRoster,
    cycles: Vec<Cycle>,
    ledger: PaymentLedger,
    config: GroupConfig,
}

/// File-backed store implementing both persistence ports.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    state: RwLock<State>,
}

impl JsonFileStore {
    /// Opens the store at `dir`, creating the directory and seeding any
    /// missing collection files with their defaults.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await.map_err(StoreError::io)?;

        let roster = load_or_seed(&dir.join(MEMBERS_FILE), MemberRoster::default()).await?;
        let cycles = load_or_seed(&dir.join(CYCLES_FILE), Vec::new()).await?;
        let ledger = load_or_seed(&dir.join(PAYMENTS_FILE), PaymentLedger::new()).await?;
        let config = load_or_seed(&dir.join(CONFIG_FILE), GroupConfig::default()).await?;

        info!(
            dir = %dir.display(),
            members = roster.members.len(),
            cycles = cycles.len(),
            payments = ledger.len(),
            "opened group store"
        );

        Ok(Self {
            dir,
            state: RwLock::new(State {
                roster,
                cycles,
                ledger,
                config,
            }),
        })
    }

    fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

async fn load_or_seed<T>(path: &Path, seed: T) -> Result<T, StoreError>
where
    T: Serialize + DeserializeOwned,
{
    if path.exists() {
        let raw = fs::read_to_string(path).await.map_err(StoreError::io)?;
        serde_json::from_str(&raw).map_err(StoreError::serialization)
    } else {
        debug!(path = %path.display(), "seeding missing collection file");
        write_json(path, &seed).await?;
        Ok(seed)
    }
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(StoreError::serialization)?;
    fs::write(path, json).await.map_err(StoreError::io)
}

#[async_trait]
impl GroupStore for JsonFileStore {
    async fn load_config(&self) -> Result<GroupConfig, StoreError> {
        Ok(self.state.read().await.config.clone())
    }

    async fn save_config(&self, config: &GroupConfig) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        write_json(&self.file(CONFIG_FILE), config).await?;
        state.config = config.clone();
        Ok(())
    }

    async fn load_cycles(&self) -> Result<Vec<Cycle>, StoreError> {
        Ok(self.state.read().await.cycles.clone())
    }

    async fn replace_cycles(&self, cycles: &[Cycle]) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        write_json(&self.file(CYCLES_FILE), &cycles).await?;
        state.cycles = cycles.to_vec();
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
        let mut state = self.state.write().await;
        let mut updated = state.ledger.clone();
        updated.record(key, record);
        write_json(&self.file(PAYMENTS_FILE), &updated).await?;
        state.ledger = updated;
        Ok(())
    }

    async fn save_rotation(
        &self,
        cycles: &[Cycle],
        config: &GroupConfig,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        write_json(&self.file(CYCLES_FILE), &cycles).await?;
        write_json(&self.file(CONFIG_FILE), config).await?;
        state.cycles = cycles.to_vec();
        state.config = config.clone();
        Ok(())
    }
}

#[async_trait]
impl MemberDirectory for JsonFileStore {
    async fn list(&self) -> Result<Vec<Member>, StoreError> {
        Ok(self.state.read().await.roster.members.clone())
    }

    async fn find(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .roster
            .members
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    async fn insert(&self, details: NewMember) -> Result<Member, StoreError> {
        let mut state = self.state.write().await;
        let mut roster = state.roster.clone();
        let member = Member::new(MemberId::new(roster.next_id), details, Timestamp::now());
        roster.next_id += 1;
        roster.members.push(member.clone());
        write_json(&self.file(MEMBERS_FILE), &roster).await?;
        state.roster = roster;
        Ok(member)
    }

    async fn update(
        &self,
        id: MemberId,
        patch: MemberPatch,
    ) -> Result<Option<Member>, StoreError> {
        let mut state = self.state.write().await;
        let mut roster = state.roster.clone();
        let Some(member) = roster.members.iter_mut().find(|m| m.id() == id) else {
            return Ok(None);
        };
        member.apply_patch(patch);
        let updated = member.clone();
        write_json(&self.file(MEMBERS_FILE), &roster).await?;
        state.roster = roster;
        Ok(Some(updated))
    }

    async fn remove(&self, id: MemberId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let mut roster = state.roster.clone();
        let Some(position) = roster.members.iter().position(|m| m.id() == id) else {
            return Ok(false);
        };
        roster.members.remove(position);
        write_json(&self.file(MEMBERS_FILE), &roster).await?;
        state.roster = roster;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Amount, CycleId};
    use tempfile::TempDir;

    fn details(name: &str) -> NewMember {
        NewMember::new(name, None).unwrap()
    }

    #[tokio::test]
    async fn open_seeds_missing_files_with_defaults() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        assert!(dir.path().join(MEMBERS_FILE).exists());
        assert!(dir.path().join(CYCLES_FILE).exists());
        assert!(dir.path().join(PAYMENTS_FILE).exists());
        assert!(dir.path().join(CONFIG_FILE).exists());

        let config = store.load_config().await.unwrap();
        assert_eq!(config.member_count(), 10);
        assert_eq!(config.cycle_amount(), Amount::new(2000));
        assert!(store.load_cycles().await.unwrap().is_empty());
        assert!(store.load_ledger().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn members_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).await.unwrap();
            store.insert(details("Awa")).await.unwrap();
            store.insert(details("Moussa")).await.unwrap();
        }

        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let members = store.list().await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name(), "Awa");
        assert_eq!(members[1].id(), MemberId::new(2));
    }

    #[tokio::test]
    async fn id_counter_survives_removal_and_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).await.unwrap();
            store.insert(details("Awa")).await.unwrap();
            let second = store.insert(details("Moussa")).await.unwrap();
            assert!(store.remove(second.id()).await.unwrap());
        }

        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let third = store.insert(details("Fatou")).await.unwrap();
        assert_eq!(third.id(), MemberId::new(3));
    }

    #[tokio::test]
    async fn payments_persist_under_composite_keys() {
        let dir = TempDir::new().unwrap();
        let key = PaymentKey::new(CycleId::new(1), MemberId::new(2), 3);
        {
            let store = JsonFileStore::open(dir.path()).await.unwrap();
            store
                .record_payment(key, PaymentRecord::new(Amount::new(2000), Timestamp::now()))
                .await
                .unwrap();
        }

        let raw = std::fs::read_to_string(dir.path().join(PAYMENTS_FILE)).unwrap();
        assert!(raw.contains("\"1-2-3\""));

        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let ledger = store.load_ledger().await.unwrap();
        assert_eq!(ledger.get(&key).unwrap().amount(), Amount::new(2000));
    }

    #[tokio::test]
    async fn save_rotation_persists_cycles_and_config() {
        let dir = TempDir::new().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).await.unwrap();
            let mut config = store.load_config().await.unwrap();
            let cycles = crate::domain::cycle::schedule::generate(&config).unwrap();
            config.advance_to(CycleId::new(2));
            store.save_rotation(&cycles, &config).await.unwrap();
        }

        let store = JsonFileStore::open(dir.path()).await.unwrap();
        assert_eq!(store.load_cycles().await.unwrap().len(), 10);
        assert_eq!(
            store.load_config().await.unwrap().current_cycle(),
            CycleId::new(2)
        );
    }

    #[tokio::test]
    async fn open_rejects_corrupted_collection_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();

        let result = JsonFileStore::open(dir.path()).await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[tokio::test]
    async fn update_rewrites_roster_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let member = store.insert(details("Awa")).await.unwrap();

        let patch: MemberPatch = serde_json::from_value(serde_json::json!({
            "phone": "+221770000000"
        }))
        .unwrap();
        let updated = store.update(member.id(), patch).await.unwrap().unwrap();
        assert_eq!(updated.phone(), "+221770000000");

        let raw = std::fs::read_to_string(dir.path().join(MEMBERS_FILE)).unwrap();
        assert!(raw.contains("+221770000000"));
    }
}
