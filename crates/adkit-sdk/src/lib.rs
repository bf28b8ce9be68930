//! Ad-open orchestration for the adkit SDK.
//!
//! This crate composes the session registry and the link inspector into the
//! public SDK surface: [`AdService`] validates links, records sessions, and
//! drives an external presentation collaborator, delivering outcomes on a
//! completion channel. The collaborator side of the boundary is expressed by
//! the [`Presenter`] and [`ExternalOpener`] traits.

pub mod generator;
pub mod message;
pub mod preload;
pub mod presenter;
pub mod service;

pub use generator::{OfferIdGenerator, RandomOfferId};
pub use message::ControlMessage;
pub use preload::PreloadedAd;
pub use presenter::{
    EventReceiver, ExternalOpener, PresentationError, PresentationEvent, Presenter,
};
pub use service::{AdService, CompletionSender};
