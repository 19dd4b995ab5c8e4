//! Client configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Error;

/// Locale sent with every request unless configured otherwise.
pub const DEFAULT_LANG: &str = "uk";

pub const ENV_BASE_URL: &str = "EMOJISUSHI_BASE_URL";
pub const ENV_LANG: &str = "EMOJISUSHI_LANG";
pub const ENV_HTTP_ERRORS: &str = "EMOJISUSHI_HTTP_ERRORS";

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

fn default_http_errors() -> bool {
    true
}

/// Settings fixed at client construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the backend API, e.g. `https://emojisushi.com.ua/api/`.
    pub base_url: String,
    /// Locale code appended to every request as `lang=<code>`.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// When true, non-2xx responses fail with [`Error::HttpStatus`]. When
    /// false, their bodies are decoded and hydrated like any other.
    #[serde(default = "default_http_errors")]
    pub http_errors: bool,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            lang: default_lang(),
            http_errors: default_http_errors(),
        }
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    pub fn with_http_errors(mut self, enabled: bool) -> Self {
        self.http_errors = enabled;
        self
    }

    /// Reads `EMOJISUSHI_BASE_URL`, `EMOJISUSHI_LANG` and `EMOJISUSHI_HTTP_ERRORS`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", ENV_BASE_URL)))?;
        let mut config = Self::new(base_url.trim());
        if let Some(lang) = lookup(ENV_LANG).filter(|v| !v.trim().is_empty()) {
            config.lang = lang.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_HTTP_ERRORS) {
            config.http_errors = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(Error::Config(format!(
                        "{} must be true or false, got `{}`",
                        ENV_HTTP_ERRORS, other
                    )))
                }
            };
        }
        Ok(config)
    }

    /// Parses the base URL, making sure its path ends with `/` so relative
    /// endpoint paths are appended rather than replacing the last segment.
    pub(crate) fn parsed_base_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!(
                "{}: cannot be used as a base URL",
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}
