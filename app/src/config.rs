//! Application configuration loaded from the environment.

use anyhow::Context;

/// Environment variable naming the catalog backend base URL.
pub const API_URL_VAR: &str = "GAMELOG_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the catalog backend API.
    pub api_base_url: String,
}

impl AppConfig {
    /// Load configuration from the environment, applying defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_base_url(std::env::var(API_URL_VAR).ok())
    }

    fn from_base_url(base_url: Option<String>) -> anyhow::Result<Self> {
        let api_base_url = base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        url::Url::parse(&api_base_url)
            .with_context(|| format!("{API_URL_VAR} is not a valid URL: {api_base_url}"))?;
        Ok(Self { api_base_url })
    }
}
