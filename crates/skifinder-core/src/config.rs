// crates/skifinder-core/src/config.rs

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Development loopback address of the search backend. The port stays clear
/// of common OS services; a production deployment overrides it via
/// `SKIFINDER_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Transport timeout applied to every backend request. Overridable via
/// `SKIFINDER_TIMEOUT_SECS`.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the search pipeline.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base address of the backend, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Directory holding client-local state (the recent-search history).
    pub data_dir: PathBuf,
    /// API key for the upstream mapping service, used only to build photo
    /// URLs. Optional: without it, records simply expose no photo links.
    pub maps_api_key: Option<String>,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            base_url: trim_base(&try_load::<String>("SKIFINDER_BASE_URL", DEFAULT_BASE_URL)),
            timeout: Duration::from_secs(try_load(
                "SKIFINDER_TIMEOUT_SECS",
                &DEFAULT_TIMEOUT_SECS.to_string(),
            )),
            data_dir: env::var("SKIFINDER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            maps_api_key: env::var("GOOGLE_MAPS_API_KEY").ok(),
        }
    }

    /// Replace the backend base address (CLI flags override the environment).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = trim_base(base_url);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_dir: default_data_dir(),
            maps_api_key: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".skifinder"),
        Err(_) => PathBuf::from(".skifinder"),
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    match raw.parse() {
        Ok(v) => v,
        Err(e) => {
            warn!("Invalid {key} value: {e}, using default: {default}");
            default
                .parse()
                .unwrap_or_else(|e| panic!("default for {key} must parse: {e}"))
        }
    }
}
