//! Core types and traits for the adkit SDK.
//!
//! This crate provides the shared value types, the ad-session registry
//! trait, and the pure link-inspection functions used by the orchestration
//! layer in `adkit-sdk`.

pub mod error;
pub mod link;
pub mod metadata;
pub mod options;
pub mod registry;

pub use error::{AdError, OpenAdResult};
pub use metadata::{AdMetadata, AdStatus};
pub use options::AdOptions;
pub use registry::AdRegistry;
