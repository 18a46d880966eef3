// crates/skifinder-core/src/demo.rs

//! # Demo catalog
//!
//! A small bundled dataset served when no backend is reachable (or when the
//! user explicitly opts into demo mode). Region keys are matched against the
//! folded query, so "Vermont ski resorts" finds the `vermont` entry.

use crate::error::{FinderError, Result};
use crate::model::ResortRecord;
use crate::text::fold_key;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

static CATALOG: OnceCell<BTreeMap<String, Vec<ResortRecord>>> = OnceCell::new();

const DEMO_JSON: &str = include_str!("../data/demo_resorts.json");

/// The parsed demo catalog, keyed by folded region name. Parsed once.
pub fn catalog() -> Result<&'static BTreeMap<String, Vec<ResortRecord>>> {
    CATALOG.get_or_try_init(|| {
        let parsed: BTreeMap<String, Vec<ResortRecord>> = serde_json::from_str(DEMO_JSON)?;
        Ok(parsed)
    })
}

/// Offline counterpart of [`crate::client::SearchClient::search`].
///
/// Returns the records of the first region whose key appears in the folded
/// query (or vice versa). An unmatched query mirrors the backend's 404
/// answer so both paths surface failures identically.
pub fn search(query: &str) -> Result<Vec<ResortRecord>> {
    let folded = fold_key(query.trim());
    if folded.is_empty() {
        return Err(FinderError::EmptyQuery);
    }

    for (region, resorts) in catalog()? {
        if folded.contains(region.as_str()) || region.contains(&folded) {
            return Ok(resorts.clone());
        }
    }

    Err(FinderError::Backend {
        status: 404,
        message: "No ski resorts found for the given query".to_string(),
    })
}
