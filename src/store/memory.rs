use crate::scheduler::is_due;
use crate::{CoreError, ItemId, ReviewRecord, ReviewState};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory reference store. Write locks serialize updates per map, so a
/// state write is all-or-nothing.
#[derive(Default)]
pub struct MemoryStore {
    states: RwLock<HashMap<ItemId, ReviewState>>,
    records: RwLock<HashMap<ItemId, Vec<ReviewRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl crate::store::ReviewStore for MemoryStore {
    async fn get(&self, item: ItemId) -> Result<Option<ReviewState>, CoreError> {
        Ok(self.states.read().get(&item).cloned())
    }

    async fn upsert(&self, item: ItemId, state: ReviewState) -> Result<(), CoreError> {
        debug!(%item, interval = state.interval_days, "upserting review state");
        self.states.write().insert(item, state);
        Ok(())
    }

    async fn remove(&self, item: ItemId) -> Result<(), CoreError> {
        self.states
            .write()
            .remove(&item)
            .ok_or(CoreError::NotFound("review state"))?;
        self.records.write().remove(&item);
        Ok(())
    }

    async fn list_due(&self, now: DateTime<Utc>) -> Result<Vec<(ItemId, ReviewState)>, CoreError> {
        let states = self.states.read();
        Ok(states
            .iter()
            .filter(|(_, s)| is_due(s.due_at, now))
            .map(|(id, s)| (*id, s.clone()))
            .collect())
    }

    async fn insert_record(&self, record: &ReviewRecord) -> Result<(), CoreError> {
        let mut m = self.records.write();
        m.entry(record.item_id).or_default().push(record.clone());
        Ok(())
    }

    async fn records_for_item(&self, item: ItemId) -> Result<Vec<ReviewRecord>, CoreError> {
        Ok(self
            .records
            .read()
            .get(&item)
            .cloned()
            .unwrap_or_default())
    }
}
