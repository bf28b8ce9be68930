use adkit_core::AdOptions;
use url::Url;

/// A validated ad ready to hand to a presenter at a later point.
///
/// Preloading performs no registry write; the session is only recorded when
/// the ad is actually opened.
#[derive(Debug, Clone)]
pub struct PreloadedAd {
    url: Url,
    options: AdOptions,
}

impl PreloadedAd {
    pub(crate) fn new(url: Url, options: AdOptions) -> Self {
        Self { url, options }
    }

    /// The parsed ad link.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The options captured at preload time.
    pub fn options(&self) -> &AdOptions {
        &self.options
    }
}
