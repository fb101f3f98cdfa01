//! Remote API location.
//!
//! The host process knows the API base URL (`SAGE_API_URL`) and provides an
//! [`ApiConfig`] context while server-rendering; the shell writes it into a
//! `<meta>` tag so the hydrated client can read the same value back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// `<meta name=...>` carrying the base URL into the browser.
pub const API_URL_META: &str = "sage-api-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Blank input falls back to [`DEFAULT_API_URL`]; trailing slashes are trimmed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self { base_url: trimmed.to_owned() }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/classes`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Read the base URL the server rendered into the page, if any.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_URL_META}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content {
                Some(url) => Self::new(url),
                None => {
                    log::warn!("no {API_URL_META} meta tag; using {DEFAULT_API_URL}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}
