use crate::error::ConfigError;
use regex::Regex;
use url::Url;

/// Matches anchor hrefs against a regex and resolves them against a base URL
#[derive(Debug, Clone)]
pub struct LinkFilter {
    pattern: Regex,
    base_url: Url,
}

impl LinkFilter {
    /// Create a new link filter
    ///
    /// # Arguments
    ///
    /// * `pattern` - Regex searched for anywhere in the href
    /// * `base_url` - URL that relative hrefs are joined onto
    pub fn new(pattern: &str, base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Returns true if the href contains a match of the pattern
    pub fn matches(&self, href: &str) -> bool {
        self.pattern.is_match(href)
    }

    /// Resolves an href into an absolute URL string
    pub fn resolve(&self, href: &str) -> Option<String> {
        match self.base_url.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                ::log::warn!("Cannot resolve {} against {}: {}", href, self.base_url, e);
                None
            }
        }
    }
}
