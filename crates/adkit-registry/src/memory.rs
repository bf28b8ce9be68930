use adkit_core::{AdMetadata, AdRegistry, AdStatus};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::trace;

/// In-memory implementation of the `AdRegistry` trait using DashMap.
///
/// DashMap shards its buckets behind independent locks, so writes to
/// different ids do not contend and snapshot reads run alongside writers
/// without a global critical section.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    sessions: DashMap<String, AdMetadata>,
}

impl InMemoryRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Creates a new registry with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: DashMap::with_capacity(capacity),
        }
    }

    /// Number of tracked sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Reserved cleanup hook. No eviction policy is defined; entries live
    /// for the registry's lifetime.
    pub fn cleanup(&self) {}

    /// Reserved expiry hook, same contract as [`cleanup`](Self::cleanup).
    pub fn cleanup_expired(&self) {}

    fn set_status(&self, ad_offer_id: &str, status: AdStatus) {
        let Some(mut entry) = self.sessions.get_mut(ad_offer_id) else {
            trace!(ad_offer_id = %ad_offer_id, "status transition on unknown id, ignoring");
            return;
        };
        entry.status = status;
    }
}

#[async_trait]
impl AdRegistry for InMemoryRegistry {
    async fn record_opened(&self, ad_offer_id: &str, ad_link: &str) {
        trace!(ad_offer_id = %ad_offer_id, "recording opened ad");
        self.sessions.insert(
            ad_offer_id.to_owned(),
            AdMetadata::opened(ad_offer_id, ad_link),
        );
    }

    async fn mark_completed(&self, ad_offer_id: &str) {
        self.set_status(ad_offer_id, AdStatus::Completed);
    }

    async fn mark_closed(&self, ad_offer_id: &str) {
        self.set_status(ad_offer_id, AdStatus::Closed);
    }

    async fn active_ads(&self) -> Vec<AdMetadata> {
        self.sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
