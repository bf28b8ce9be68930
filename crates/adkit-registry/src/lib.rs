//! In-memory ad-session registry for the adkit SDK.

pub mod memory;

pub use memory::InMemoryRegistry;
