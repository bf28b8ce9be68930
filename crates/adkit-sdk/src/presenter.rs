use adkit_core::AdOptions;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;
use url::Url;

/// Lifecycle signals reported by a presentation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEvent {
    /// The view is confirmed visible to the user.
    Shown,
    /// The user closed the view, via the close control or a navigation
    /// callback. Embedded content signalling `{"action":"close"}` must be
    /// reported through this same event.
    Dismissed,
    /// The collaborator errored after construction (e.g. a load failure).
    Failed,
}

/// Channel on which a collaborator reports [`PresentationEvent`]s.
pub type EventReceiver = mpsc::UnboundedReceiver<PresentationEvent>;

#[derive(Debug, Clone, Error)]
pub enum PresentationError {
    /// The collaborator could not construct a view for the given URL.
    #[error("presentation could not be constructed: {0}")]
    Construction(String),
}

/// External UI layer that renders a link and reports shown/dismissed events.
///
/// Implementations live in the host application. A successful call returns
/// the receiving end of the event channel; the collaborator is expected to
/// send [`PresentationEvent::Shown`] only once the view is actually visible.
#[async_trait]
pub trait Presenter: Send + Sync + 'static {
    /// Presents `url` in a system browser sheet.
    async fn present_browser_sheet(&self, url: &Url)
        -> Result<EventReceiver, PresentationError>;

    /// Presents `url` in an embedded content view configured by `options`.
    async fn present_embedded(
        &self,
        url: &Url,
        options: &AdOptions,
    ) -> Result<EventReceiver, PresentationError>;
}

/// Hands validated checkout links to the host platform opener.
#[async_trait]
pub trait ExternalOpener: Send + Sync + 'static {
    async fn open(&self, url: &Url);
}
