//! Site configuration for feed generation.
//!
//! # Sections
//!
//! | Section  | Purpose                                               |
//! |----------|-------------------------------------------------------|
//! | `[site]` | Site metadata (title, description)                    |
//! | `[feed]` | Feed metadata (home_url, language, contact, author, image) |
//!
//! Every key except `feed.escape` is required: a missing key fails
//! deserialization. There is no partial or best-effort feed.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::{fs, path::Path};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// General site metadata
    pub site: SiteSection,

    /// Feed-specific metadata
    pub feed: FeedSection,
}

/// `[site]` section
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    /// Site title, reused as the channel and image title.
    pub title: String,

    /// Site description.
    pub description: String,
}

/// `[feed]` section
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSection {
    /// Canonical home URL without trailing slash (e.g. "https://example.com").
    pub home_url: String,

    /// Language tag (e.g. "en-us").
    pub language: String,

    /// Contact email address.
    pub contact: String,

    /// Author display name.
    pub author: String,

    /// Channel image URL.
    pub image: String,

    /// Escape XML entities in text fields. Off by default for parity with
    /// feeds produced by existing pipelines; see `feed::rss`.
    #[serde(default)]
    pub escape: bool,
}

impl SiteConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field contents beyond shape.
    ///
    /// # Checks
    /// - `feed.home_url` must be a valid http(s) URL with a host
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.feed.home_url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(ConfigError::Validation(format!(
                        "feed.home_url: scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    )));
                }
                if parsed.host_str().is_none() {
                    return Err(ConfigError::Validation(
                        "feed.home_url must have a valid host".into(),
                    ));
                }
            }
            Err(e) => {
                return Err(ConfigError::Validation(format!(
                    "feed.home_url is not a valid URL: {e}"
                )));
            }
        }
        Ok(())
    }

    /// RSS contact field in `"contact (author)"` form, used for
    /// managingEditor, webMaster and per-item author.
    pub fn editor(&self) -> String {
        format!("{} ({})", self.feed.contact, self.feed.author)
    }
}
