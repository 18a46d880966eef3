//! skifinder-cli
//! =============
//!
//! Command-line interface for the `skifinder-core` search pipeline.
//!
//! This crate primarily provides a binary (`skifinder`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! skifinder --help
//! skifinder probe
//! skifinder search "Vermont ski resorts"
//! skifinder --demo search vermont --min-rating 4.5
//! skifinder recent
//! ```
//!
//! For programmatic access to the pipeline, use the [`skifinder-core`]
//! crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
