// crates/skifinder-core/src/client.rs

//! # Backend client
//!
//! Handles the transport layer: the connectivity probe and the search
//! dispatch. Both walk an ordered list of candidate endpoints (the current
//! API path first, the legacy path second) and short-circuit on the first
//! success; only exhaustion of the whole list surfaces an error.

use crate::config::Config;
use crate::error::{FinderError, Result};
use crate::model::ResortRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Health-probe candidate paths, current format first.
pub const PROBE_PATHS: [&str; 2] = ["/api/test", "/test"];
/// Search candidate paths, current format first.
pub const SEARCH_PATHS: [&str; 2] = ["/api/search", "/search"];

/// Reachability of the backend, as determined by the one-shot probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectivityStatus {
    /// Probe not yet finished.
    Checking,
    /// A probe candidate answered with a success status.
    Connected,
    /// Every probe candidate failed.
    Error,
    /// The session serves the bundled demo catalog instead of a backend.
    Demo,
}

impl ConnectivityStatus {
    /// Status line shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ConnectivityStatus::Checking => "Checking connection to the backend service...",
            ConnectivityStatus::Connected => "Backend is running",
            ConnectivityStatus::Error => "Cannot connect to backend server",
            ConnectivityStatus::Demo => "Demo mode: using sample data",
        }
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// Failure payload shape: `{"error": "<text>"}` with a non-2xx status.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Blocking HTTP client for the ski-resort search backend.
pub struct SearchClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SearchClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One-shot reachability probe.
    ///
    /// Walks [`PROBE_PATHS`] and reports `Connected` on the first 2xx
    /// answer. The probe body is not interpreted. One pass, no retry.
    pub fn probe(&self) -> ConnectivityStatus {
        let outcome = self.try_candidates(&PROBE_PATHS, |url| {
            let resp = self.http.get(url).send()?;
            let status = resp.status();
            if !status.is_success() {
                return Err(FinderError::Backend {
                    status: status.as_u16(),
                    message: format!("probe rejected with HTTP {status}"),
                });
            }
            debug!(url, "backend reachable");
            Ok(())
        });

        match outcome {
            Ok(()) => ConnectivityStatus::Connected,
            Err(err) => {
                warn!(error = %err, base = %self.base_url, "all probe candidates failed");
                ConnectivityStatus::Error
            }
        }
    }

    /// Submit a search query.
    ///
    /// The query must be non-empty after trimming; the session layer treats
    /// [`FinderError::EmptyQuery`] as a silent no-op. Walks [`SEARCH_PATHS`]
    /// and returns the first successfully parsed record list. On exhaustion,
    /// a structured error from the last reached candidate is kept verbatim;
    /// pure transport failures collapse to [`FinderError::Unreachable`].
    pub fn search(&self, query: &str) -> Result<Vec<ResortRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FinderError::EmptyQuery);
        }

        self.try_candidates(&SEARCH_PATHS, |url| self.search_one(url, query))
            .map_err(|err| match err {
                backend @ FinderError::Backend { .. } => backend,
                _ => FinderError::Unreachable {
                    base: self.base_url.clone(),
                },
            })
    }

    /// POST the query to a single candidate endpoint.
    fn search_one(&self, url: &str, query: &str) -> Result<Vec<ResortRecord>> {
        let resp = self.http.post(url).json(&SearchRequest { query }).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(FinderError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        // A 2xx body that fails to parse as a record list counts as a
        // backend error for this candidate, not a hard stop.
        serde_json::from_str(&body).map_err(|err| FinderError::Backend {
            status: status.as_u16(),
            message: format!("unparseable result list: {err}"),
        })
    }

    /// Try candidate paths in order, short-circuiting on the first success.
    ///
    /// Failures from non-final candidates are logged and swallowed; the
    /// last failure is returned once every candidate has been exhausted.
    fn try_candidates<T>(
        &self,
        paths: &[&str],
        attempt: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        let mut last_err = None;
        for path in paths {
            let url = format!("{}{}", self.base_url, path);
            debug!(%url, "trying candidate endpoint");
            match attempt(&url) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(%url, error = %err, "candidate endpoint failed");
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| FinderError::Unreachable {
            base: self.base_url.clone(),
        }))
    }
}
