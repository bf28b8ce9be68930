use std::sync::Arc;

use adkit_core::{link, AdError, AdMetadata, AdOptions, AdRegistry, OpenAdResult};
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};
use url::Url;

use crate::generator::{OfferIdGenerator, RandomOfferId};
use crate::preload::PreloadedAd;
use crate::presenter::{ExternalOpener, PresentationEvent, Presenter};

/// Sender half of an ad-open completion channel.
///
/// Sends to a dropped receiver are silently ignored.
pub type CompletionSender = mpsc::UnboundedSender<OpenAdResult>;

/// Orchestrates the ad-open flow: link validation, session recording, and
/// driving the presentation collaborator.
///
/// The service owns no global state; construct one per host application and
/// inject the registry and presenter explicitly.
#[derive(Debug, Clone)]
pub struct AdService<R, P, G = RandomOfferId> {
    registry: Arc<R>,
    presenter: Arc<P>,
    generator: Arc<G>,
}

impl<R: AdRegistry, P: Presenter> AdService<R, P> {
    /// Creates a service with the default random offer-id generator.
    pub fn new(registry: R, presenter: P) -> Self {
        Self::with_generator(registry, presenter, RandomOfferId)
    }
}

impl<R: AdRegistry, P: Presenter, G: OfferIdGenerator> AdService<R, P, G> {
    /// Creates a service with a custom offer-id generator.
    pub fn with_generator(registry: R, presenter: P, generator: G) -> Self {
        Self {
            registry: Arc::new(registry),
            presenter: Arc::new(presenter),
            generator: Arc::new(generator),
        }
    }

    /// Opens an ad link, recording the session and driving presentation.
    ///
    /// Outcomes arrive on `completion`: `Ok(link)` once the view is confirmed
    /// visible, and `Err(PresentationFailed)` if construction fails, the view
    /// errors, or the user later dismisses it. A user-driven close is
    /// reported as a failure after the session is marked closed, so a single
    /// call can deliver a success followed by a failure.
    ///
    /// An empty or unparsable link yields `Err(InvalidUrl)` before any
    /// registry write. If presentation construction fails, the already
    /// recorded `Opened` entry is left in place.
    pub async fn open_ad(&self, ad_link: &str, options: AdOptions, completion: CompletionSender) {
        if ad_link.is_empty() {
            let _ = completion.send(Err(AdError::InvalidUrl));
            return;
        }
        let url = match Url::parse(ad_link) {
            Ok(url) => url,
            Err(error) => {
                debug!(ad_link = %ad_link, error = %error, "rejecting unparsable ad link");
                let _ = completion.send(Err(AdError::InvalidUrl));
                return;
            }
        };

        let ad_offer_id = link::extract_ad_offer_id(ad_link)
            .unwrap_or_else(|| self.generator.generate());
        debug!(ad_offer_id = %ad_offer_id, "opening ad");
        self.registry.record_opened(&ad_offer_id, ad_link).await;

        let started = if options.use_browser_sheet {
            self.presenter.present_browser_sheet(&url).await
        } else {
            self.presenter.present_embedded(&url, &options).await
        };

        let mut events = match started {
            Ok(events) => events,
            Err(error) => {
                // The `Opened` entry is intentionally left in place.
                warn!(ad_offer_id = %ad_offer_id, error = %error, "presentation construction failed");
                let _ = completion.send(Err(AdError::PresentationFailed));
                return;
            }
        };

        let registry = Arc::clone(&self.registry);
        let original_link = ad_link.to_owned();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    PresentationEvent::Shown => {
                        trace!(ad_offer_id = %ad_offer_id, "ad view shown");
                        let _ = completion.send(Ok(original_link.clone()));
                    }
                    PresentationEvent::Dismissed => {
                        registry.mark_closed(&ad_offer_id).await;
                        let _ = completion.send(Err(AdError::PresentationFailed));
                        break;
                    }
                    PresentationEvent::Failed => {
                        warn!(ad_offer_id = %ad_offer_id, "presentation reported failure");
                        let _ = completion.send(Err(AdError::PresentationFailed));
                        break;
                    }
                }
            }
        });
    }

    /// Builds a presentable handle without recording a session.
    ///
    /// Preload validation is weaker than the checkout path: any non-empty
    /// link that parses as a URL is accepted, regardless of scheme.
    pub fn preload_ad(&self, ad_link: &str, options: AdOptions) -> Option<PreloadedAd> {
        let url = link::preloadable_url(ad_link)?;
        Some(PreloadedAd::new(url, options))
    }

    /// Validates a checkout link and hands it to the platform opener.
    ///
    /// Fire-and-forget: links that are not absolute `https` URLs are dropped
    /// without an outcome. No completion channel exists for this path.
    pub async fn open_checkout<O: ExternalOpener>(&self, checkout_link: &str, opener: &O) {
        let Some(url) = link::presentable_url(checkout_link) else {
            debug!(checkout_link = %checkout_link, "rejecting checkout link");
            return;
        };
        opener.open(&url).await;
    }

    /// Marks the session completed, a no-op for unknown ids.
    pub async fn mark_completed(&self, ad_offer_id: &str) {
        self.registry.mark_completed(ad_offer_id).await;
    }

    /// Marks the session closed, a no-op for unknown ids.
    pub async fn mark_closed(&self, ad_offer_id: &str) {
        self.registry.mark_closed(ad_offer_id).await;
    }

    /// Snapshot of all tracked sessions.
    pub async fn active_ads(&self) -> Vec<AdMetadata> {
        self.registry.active_ads().await
    }
}
