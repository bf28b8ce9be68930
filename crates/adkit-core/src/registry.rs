use crate::metadata::AdMetadata;
use async_trait::async_trait;

/// Concurrent store of per-ad session state.
///
/// Each operation is individually atomic; callers composing "read then mark"
/// sequences get no atomicity across calls. Status transitions on unknown
/// ids are silent no-ops, never errors: availability is favored over strict
/// consistency.
#[async_trait]
pub trait AdRegistry: Send + Sync + 'static {
    /// Inserts a fresh `Opened` entry with the current timestamp,
    /// overwriting any prior entry under the same id.
    async fn record_opened(&self, ad_offer_id: &str, ad_link: &str);

    /// Sets the entry's status to `Completed` if it exists.
    async fn mark_completed(&self, ad_offer_id: &str);

    /// Sets the entry's status to `Closed` if it exists.
    async fn mark_closed(&self, ad_offer_id: &str);

    /// Returns a snapshot of all entries in unspecified order.
    ///
    /// Safe to call concurrently with writers.
    async fn active_ads(&self) -> Vec<AdMetadata>;
}
