//! Client-side API configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR host renders the API base URL into the document head as
//! `<meta name="kokmaisa-api-base">`. During SSR the value is provided through
//! context; after hydration it is read back from the DOM.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "kokmaisa-api-base";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Where the KokMaisa REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash (`https://api.example.com/v1`, `/api`).
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build from a raw value, trimming whitespace and trailing slashes.
    /// Blank input falls back to the default.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base = raw.map(str::trim).map(|r| r.trim_end_matches('/')).unwrap_or_default();
        if base.is_empty() {
            Self::default()
        } else {
            Self { base_url: base.to_owned() }
        }
    }

    /// Resolve the configuration for the current runtime.
    ///
    /// Hydrate: the `<meta>` tag written by the SSR shell. Elsewhere: default.
    #[must_use]
    pub fn from_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            Self::from_raw(content.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Absolute URL for `path` (which must start with `/`).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
