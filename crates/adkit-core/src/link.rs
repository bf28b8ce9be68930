//! Pure link validation and identifier extraction.
//!
//! These functions never error: absence of a result is `None` or `false`,
//! and callers decide how to react (e.g. surfacing [`AdError::InvalidUrl`]).
//!
//! [`AdError::InvalidUrl`]: crate::AdError::InvalidUrl

use url::Url;

/// Extracts the ad offer id from a link's query string.
///
/// Returns the value of the first query parameter named exactly `id`,
/// scanning left to right. Returns `None` when the link does not parse as
/// a URL, has no query component, or carries no `id` parameter.
pub fn extract_ad_offer_id(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    for (name, value) in url.query_pairs() {
        if name == "id" {
            return Some(value.into_owned());
        }
    }
    None
}

/// Whether a checkout link may be handed to the platform opener.
///
/// Only absolute `https` URLs qualify; `http` and every other scheme are
/// rejected.
pub fn is_presentable(link: &str) -> bool {
    presentable_url(link).is_some()
}

/// Parses `link` under the checkout rules, returning the URL when it passes.
pub fn presentable_url(link: &str) -> Option<Url> {
    let url = Url::parse(link).ok()?;
    // `Url::parse` lower-cases the scheme during normalization.
    (url.scheme() == "https").then_some(url)
}

/// Whether an ad link may be preloaded.
///
/// Deliberately weaker than [`is_presentable`]: any non-empty link that
/// parses as a URL is accepted, regardless of scheme.
pub fn can_preload(link: &str) -> bool {
    preloadable_url(link).is_some()
}

/// Parses `link` under the preload rules, returning the URL when it passes.
pub fn preloadable_url(link: &str) -> Option<Url> {
    if link.is_empty() {
        return None;
    }
    Url::parse(link).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_parameter() {
        assert_eq!(
            extract_ad_offer_id("https://x.com/ad?id=abc-123"),
            Some("abc-123".to_string())
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let link = "https://x.com/ad?id=abc-123";
        assert_eq!(extract_ad_offer_id(link), extract_ad_offer_id(link));
    }

    #[test]
    fn first_id_parameter_wins() {
        assert_eq!(
            extract_ad_offer_id("https://x.com/?id=first&id=second"),
            Some("first".to_string())
        );
    }

    #[test]
    fn id_among_other_parameters() {
        assert_eq!(
            extract_ad_offer_id("https://x.com/?utm=a&id=offer-7&ref=b"),
            Some("offer-7".to_string())
        );
    }

    #[test]
    fn missing_id_yields_none() {
        assert_eq!(extract_ad_offer_id("https://x.com/ad?other=1"), None);
        assert_eq!(extract_ad_offer_id("https://x.com/ad"), None);
    }

    #[test]
    fn unparsable_link_yields_none() {
        assert_eq!(extract_ad_offer_id("not-a-url"), None);
        assert_eq!(extract_ad_offer_id(""), None);
    }

    #[test]
    fn https_is_presentable() {
        assert!(is_presentable("https://a.com"));
        // Scheme comparison is case-insensitive via URL normalization.
        assert!(is_presentable("HTTPS://a.com"));
    }

    #[test]
    fn non_https_is_not_presentable() {
        assert!(!is_presentable("http://a.com"));
        assert!(!is_presentable("ftp://a.com"));
        assert!(!is_presentable("not-a-url"));
        assert!(!is_presentable(""));
    }

    #[test]
    fn preload_accepts_any_scheme() {
        assert!(can_preload("https://ads.example.com/offer"));
        assert!(can_preload("http://ads.example.com/offer"));
        assert!(can_preload("ftp://files.example.com/spot"));
    }

    #[test]
    fn preload_rejects_empty_and_unparsable() {
        assert!(!can_preload(""));
        assert!(!can_preload("no scheme here"));
    }
}
