use crate::{CoreError, ItemId, ReviewRecord, ReviewState};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod memory;

pub use self::memory::MemoryStore;

/// Persistence seam for per-item review state.
///
/// Implementations must serialize writes per item: two concurrent reviews
/// of the same item may race at the caller, but only whole states reach
/// storage (last writer wins).
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn get(&self, item: ItemId) -> Result<Option<ReviewState>, CoreError>;

    /// Replaces the full state for an item in one atomic write.
    async fn upsert(&self, item: ItemId, state: ReviewState) -> Result<(), CoreError>;

    async fn remove(&self, item: ItemId) -> Result<(), CoreError>;

    /// Items whose due date has arrived: `due_at <= now`.
    async fn list_due(&self, now: DateTime<Utc>) -> Result<Vec<(ItemId, ReviewState)>, CoreError>;

    async fn insert_record(&self, record: &ReviewRecord) -> Result<(), CoreError>;
    async fn records_for_item(&self, item: ItemId) -> Result<Vec<ReviewRecord>, CoreError>;
}
