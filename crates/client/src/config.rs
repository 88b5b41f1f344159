//! Client configuration
//!
//! The only setting is where the remote service lives. It is read from the
//! `CLINICA_API_URL` environment variable and defaults to a local server.

use clinica_core::{ClinicError, ClinicResult};
use reqwest::Url;

/// Environment variable holding the service base URL
pub const API_URL_VAR: &str = "CLINICA_API_URL";

/// Base URL used when `CLINICA_API_URL` is unset or blank
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Connection settings for the remote clinic service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, always ending in `/`
    pub base_url: Url,
}

impl ClientConfig {
    /// Parse a base URL
    pub fn new(raw: &str) -> ClinicResult<Self> {
        let mut base_url = Url::parse(raw)
            .map_err(|e| ClinicError::invalid_config(format!("{API_URL_VAR}={raw}: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ClinicError::invalid_config(format!(
                "{API_URL_VAR}={raw}: expected an http(s) URL"
            )));
        }

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { base_url })
    }

    /// Read the configuration from the environment
    pub fn from_env() -> ClinicResult<Self> {
        match std::env::var(API_URL_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(raw.trim()),
            _ => Self::new(DEFAULT_API_URL),
        }
    }
}
