use thiserror::Error;

/// Terminal outcomes an ad-open call can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdError {
    /// The supplied link was empty or did not parse as a URL.
    #[error("ad link is empty or not a valid URL")]
    InvalidUrl,
    /// The presentation collaborator could not be constructed, errored
    /// while presenting, or was dismissed by the user.
    #[error("ad presentation could not be started or was dismissed")]
    PresentationFailed,
}

/// Final outcome of an ad-open call, delivered on the completion channel.
///
/// Carries the original link string on success.
pub type OpenAdResult = Result<String, AdError>;
