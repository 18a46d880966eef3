// crates/skifinder-core/src/lib.rs

//! # skifinder-core
//!
//! Client-side search pipeline for ski-resort discovery:
//! submit query → probe/select a working backend endpoint → receive a list
//! of place records → apply filter/sort/pagination view state → render.
//!
//! The crate is the library behind `skifinder-cli`; it owns the transport
//! (candidate-endpoint fallback), the session state machine, the pure view
//! projection and the persisted recent-search history. Rendering is the
//! caller's job.

pub mod client; // Transport: prober + dispatcher
pub mod config;
#[cfg(feature = "demo")]
pub mod demo; // The bundled offline catalog
pub mod error;
pub mod history;
pub mod model;
pub mod session; // The central state machine
pub mod text;
pub mod view; // The pure projection

// Re-exports
pub use crate::client::{ConnectivityStatus, SearchClient};
pub use crate::config::Config;
pub use crate::error::{FinderError, Result};
pub use crate::history::RecentSearches;
pub use crate::model::{ResortRecord, Review};
pub use crate::session::{Phase, SearchTicket, Session};
pub use crate::view::{project, project_windowed, FilterState, ProjectedView, SortBy, Window};

/// Convenience imports for binaries and demo programs.
pub mod prelude {
    pub use crate::client::{ConnectivityStatus, SearchClient};
    pub use crate::config::Config;
    #[cfg(feature = "demo")]
    pub use crate::demo;
    pub use crate::error::{FinderError, Result};
    pub use crate::history::RecentSearches;
    pub use crate::model::{ResortRecord, Review};
    pub use crate::session::{Phase, Session};
    pub use crate::view::{FilterState, SortBy};
}
