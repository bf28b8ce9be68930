use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracked ad session.
///
/// Every session starts as `Opened`. No transition table is enforced:
/// any status may overwrite any other while the entry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    Opened,
    Completed,
    Closed,
    Failed,
}

/// Tracked state for a single ad session, keyed by its offer id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdMetadata {
    /// Identifier extracted from or generated for the ad link.
    pub ad_offer_id: String,
    /// The original link the ad was opened with.
    pub ad_link: String,
    /// When the session was recorded.
    pub timestamp: Timestamp,
    /// Current lifecycle status.
    pub status: AdStatus,
}

impl AdMetadata {
    /// Creates a fresh `Opened` entry stamped with the current instant.
    pub fn opened(ad_offer_id: impl Into<String>, ad_link: impl Into<String>) -> Self {
        Self {
            ad_offer_id: ad_offer_id.into(),
            ad_link: ad_link.into(),
            timestamp: Timestamp::now(),
            status: AdStatus::Opened,
        }
    }
}
