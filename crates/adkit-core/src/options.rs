use typed_builder::TypedBuilder;

/// Per-open configuration, consumed once when an ad is opened or preloaded.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct AdOptions {
    /// Free-form ad type tag understood by the hosted content.
    #[builder(default = String::from("timed"), setter(into))]
    pub ad_type: String,
    /// Selects the browser-sheet strategy instead of the embedded view.
    #[builder(default = false)]
    pub use_browser_sheet: bool,
}

impl Default for AdOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
