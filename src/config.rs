use log::debug;
use reqwest::Url;

use crate::clients::errors::{Error, Result};

/// Public Deezer API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.deezer.com";
/// Overrides the API origin, e.g. to point at a proxy or a local mock.
pub const BASE_URL_VAR: &str = "MUSICLIB_BASE_URL";
/// Overrides the `User-Agent` header.
pub const USER_AGENT_VAR: &str = "MUSICLIB_USER_AGENT";

/// Settings needed to build a `DeezerClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API origin every endpoint path is appended to.
    pub base_url: Url,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Config {
    /// Builds a config from `MUSICLIB_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut builder = ConfigBuilder::new();
        if let Some(base_url) = read_var(BASE_URL_VAR)? {
            builder = builder.base_url(base_url);
        }
        if let Some(user_agent) = read_var(USER_AGENT_VAR)? {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }
}

// Unset is fine, set-but-not-unicode is a configuration error
fn read_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => {
            debug!("Using {name} from environment");
            Ok(Some(value))
        }
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(Error::from(err)),
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Builds a [`Config`], validating the base URL.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ConfigBuilder {
    /// Builder with every setting at its default.
    pub fn new() -> Self {
        Self {
            base_url: None,   // Defaults to the public Deezer API
            user_agent: None, // Defaults to "musiclib/<version>"
        }
    }

    /// Sets the API origin.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Fails with a configuration error if the base URL is unusable.
    pub fn build(self) -> Result<Config> {
        let base_url = match self.base_url {
            Some(raw) => parse_base_url(&raw)?,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| Error::ConfigurationError(e.to_string()))?,
        };
        Ok(Config {
            base_url,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}

/// Parses an API origin, rejecting anything a request path cannot be appended to.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::ConfigurationError(format!("Invalid base URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigurationError(format!(
            "Base URL {raw:?} must be an http(s) origin"
        )));
    }
    Ok(url)
}
