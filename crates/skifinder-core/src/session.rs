// crates/skifinder-core/src/session.rs

//! # Search session
//!
//! The centrally-owned state object behind the UI: raw results, filter
//! state, pagination window, recent history, connectivity status and the
//! result/detail state machine. Every mutation goes through a discrete
//! transition on [`Session`]; nothing else touches the fields.
//!
//! The single-flight rule is a hard invariant here, not a disabled button:
//! [`Session::begin_search`] refuses a second submission while one is
//! outstanding, and stamps each accepted submission with a monotonically
//! increasing generation so a stale completion (after a cancel) is
//! discarded instead of clobbering newer results.

use crate::client::{ConnectivityStatus, SearchClient};
use crate::error::{FinderError, Result};
use crate::history::RecentSearches;
use crate::model::ResortRecord;
use crate::view::{project_windowed, FilterState, ProjectedView, Window};
use tracing::debug;

/// Result/detail phase of the session.
///
/// `Idle → Loading → {Populated | Errored}`; `Populated → DetailOpen` on
/// selection and back on close.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Populated,
    Errored,
    DetailOpen,
}

/// Token for one accepted search submission.
///
/// Not cloneable: the holder either completes it or drops it. The embedded
/// generation number is what lets the session reject stale completions.
#[derive(Debug)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Client-side UI state, updated via discrete transitions.
#[derive(Debug)]
pub struct Session {
    status: ConnectivityStatus,
    phase: Phase,
    raw: Vec<ResortRecord>,
    filters: FilterState,
    window: Window,
    selected: Option<String>,
    history: RecentSearches,
    error: Option<String>,
    generation: u64,
}

impl Session {
    pub fn new(history: RecentSearches) -> Self {
        Self {
            status: ConnectivityStatus::Checking,
            phase: Phase::Idle,
            raw: Vec::new(),
            filters: FilterState::default(),
            window: Window::new(),
            selected: None,
            history,
            error: None,
            generation: 0,
        }
    }

    // -------------------------------------------------------------------
    // Connectivity
    // -------------------------------------------------------------------

    /// Run the one-shot probe and record its outcome. The status is
    /// informational: search stays available regardless.
    pub fn check_backend(&mut self, client: &SearchClient) -> ConnectivityStatus {
        self.status = ConnectivityStatus::Checking;
        self.status = client.probe();
        if self.status == ConnectivityStatus::Error {
            self.error = Some("Cannot connect to backend server.".to_string());
        }
        self.status
    }

    pub fn set_status(&mut self, status: ConnectivityStatus) {
        self.status = status;
    }

    pub fn status(&self) -> ConnectivityStatus {
        self.status
    }

    // -------------------------------------------------------------------
    // Search dispatch
    // -------------------------------------------------------------------

    /// Accept a submission: trims the query, refuses empty input and
    /// re-entrant submissions, closes any open detail view, clears the
    /// previous results and enters `Loading`.
    pub fn begin_search(&mut self, query: &str) -> Result<SearchTicket> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(FinderError::EmptyQuery);
        }
        if self.phase == Phase::Loading {
            return Err(FinderError::SearchInFlight);
        }

        self.selected = None;
        self.error = None;
        self.raw.clear();
        self.phase = Phase::Loading;
        self.generation += 1;
        Ok(SearchTicket {
            generation: self.generation,
            query: trimmed.to_string(),
        })
    }

    /// Commit a search outcome.
    ///
    /// Returns `false` (leaving all state untouched) when the ticket is
    /// stale, i.e. the submission was cancelled before this completion
    /// arrived. On success the raw results are replaced wholesale, the
    /// window resets to the first page and the query enters the history.
    /// The filter state is deliberately retained.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<ResortRecord>>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale search completion"
            );
            return false;
        }

        match outcome {
            Ok(records) => {
                self.raw = records;
                self.window.reset();
                self.history.record(&ticket.query);
                self.phase = Phase::Populated;
            }
            Err(err) => {
                self.raw.clear();
                self.error = Some(err.user_message());
                self.phase = Phase::Errored;
            }
        }
        true
    }

    /// Abandon the outstanding submission, if any. Bumps the generation so
    /// a completion that still arrives for it is discarded.
    pub fn cancel_search(&mut self) {
        if self.phase == Phase::Loading {
            self.generation += 1;
            self.phase = Phase::Idle;
        }
    }

    /// Full dispatch against the backend: begin, send, commit.
    ///
    /// An empty/whitespace query is silently ignored: no request is sent
    /// and no state changes.
    pub fn run_search(&mut self, client: &SearchClient, query: &str) -> Result<()> {
        let ticket = match self.begin_search(query) {
            Ok(t) => t,
            Err(FinderError::EmptyQuery) => return Ok(()),
            Err(err) => return Err(err),
        };
        let outcome = client.search(ticket.query());
        self.complete_search(ticket, outcome);
        Ok(())
    }

    /// Full dispatch against the bundled demo catalog.
    #[cfg(feature = "demo")]
    pub fn run_demo_search(&mut self, query: &str) -> Result<()> {
        let ticket = match self.begin_search(query) {
            Ok(t) => t,
            Err(FinderError::EmptyQuery) => return Ok(()),
            Err(err) => return Err(err),
        };
        let outcome = crate::demo::search(ticket.query());
        self.complete_search(ticket, outcome);
        Ok(())
    }

    // -------------------------------------------------------------------
    // View state
    // -------------------------------------------------------------------

    /// The displayed list: a pure function of (raw results, filters,
    /// window). Never cached, never mutated independently of its inputs.
    pub fn displayed(&self) -> ProjectedView<'_> {
        project_windowed(&self.raw, &self.filters, &self.window)
    }

    pub fn raw_results(&self) -> &[ResortRecord] {
        &self.raw
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Widen the pagination window by one page.
    pub fn show_more(&mut self) {
        if matches!(self.phase, Phase::Populated | Phase::DetailOpen) {
            self.window.show_more();
        }
    }

    // -------------------------------------------------------------------
    // Detail view
    // -------------------------------------------------------------------

    /// Open the detail view for a displayed record. Only valid once results
    /// are populated; returns `false` for an unknown id.
    pub fn select(&mut self, place_id: &str) -> bool {
        if self.phase != Phase::Populated {
            return false;
        }
        if self.raw.iter().any(|r| r.place_id == place_id) {
            self.selected = Some(place_id.to_string());
            self.phase = Phase::DetailOpen;
            true
        } else {
            false
        }
    }

    pub fn close_detail(&mut self) {
        if self.phase == Phase::DetailOpen {
            self.selected = None;
            self.phase = Phase::Populated;
        }
    }

    pub fn selected(&self) -> Option<&ResortRecord> {
        let id = self.selected.as_deref()?;
        self.raw.iter().find(|r| r.place_id == id)
    }

    // -------------------------------------------------------------------
    // Misc accessors
    // -------------------------------------------------------------------

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &RecentSearches {
        &self.history
    }
}
