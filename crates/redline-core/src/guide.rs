#![forbid(unsafe_code)]

//! Guide overlay configuration.
//!
//! A guide is a single reference image laid over the host element at its
//! top-left. The only configuration is the image URL; sizing comes from the
//! image itself once it loads, at which point the host grows to at least the
//! image's natural height (never shrinks).

use crate::ConfigError;

/// Attribute carrying the guide image URL.
pub const ATTR_GUIDE_URL: &str = "data-guide-url";

/// Parsed guide overlay configuration for one host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    /// Image URL to load.
    pub url: String,
}

impl GuideConfig {
    /// Populate from an attribute source.
    ///
    /// Errors with [`ConfigError::MissingGuideUrl`] when the attribute is
    /// absent or empty.
    pub fn from_attrs<F>(attr: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match attr(ATTR_GUIDE_URL) {
            Some(url) if !url.is_empty() => Ok(Self { url }),
            _ => Err(ConfigError::MissingGuideUrl),
        }
    }
}

/// Host height after a guide image of `natural_height` px finishes loading.
///
/// The host is only ever grown, so toggling a short guide on a tall element
/// leaves the element alone.
#[must_use]
pub fn expanded_height(host_height: f64, natural_height: f64) -> f64 {
    host_height.max(natural_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_attribute_is_required() {
        let err = GuideConfig::from_attrs(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::MissingGuideUrl);
    }

    #[test]
    fn empty_url_counts_as_missing() {
        let err = GuideConfig::from_attrs(|name| {
            (name == ATTR_GUIDE_URL).then(String::new)
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingGuideUrl);
    }

    #[test]
    fn url_is_taken_verbatim() {
        let config = GuideConfig::from_attrs(|name| {
            (name == ATTR_GUIDE_URL).then(|| "guides/home.png".to_string())
        })
        .unwrap();
        assert_eq!(config.url, "guides/home.png");
    }

    #[test]
    fn host_never_shrinks_to_the_image() {
        assert_eq!(expanded_height(300.0, 200.0), 300.0);
        assert_eq!(expanded_height(200.0, 300.0), 300.0);
    }
}
