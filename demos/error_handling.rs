//! Error handling example for skifinder-rs
//!
//! This example demonstrates how the pipeline reports and recovers from
//! failures: unreachable backends, unmatched queries, empty input and the
//! single-flight guard.

use skifinder_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== SkiFinder Error Handling Example ===\n");

    // Example 1: Probing a backend that is not there
    println!("--- Example 1: Probe an unreachable backend ---");
    let config = Config::default().with_base_url("http://127.0.0.1:9");
    let client = SearchClient::new(&config)?;
    match client.probe() {
        ConnectivityStatus::Connected => println!("  ✓ Backend is running"),
        status => println!("  ✗ {}", status.message()),
    }
    println!();

    // Example 2: A search against the dead backend stays recoverable
    println!("--- Example 2: Search failure surfaces a retry message ---");
    let mut session = Session::new(RecentSearches::default());
    session.run_search(&client, "vermont")?;
    if let Some(message) = session.error() {
        println!("  {message}");
    }
    println!();

    // Example 3: Queries nothing in the demo catalog matches
    println!("--- Example 3: Unmatched demo query ---");
    match demo::search("sahara desert") {
        Ok(resorts) => println!("  Found {} resorts", resorts.len()),
        Err(FinderError::Backend { status, message }) => {
            println!("  Backend said ({status}): {message}")
        }
        Err(other) => println!("  Unexpected error: {other}"),
    }
    println!();

    // Example 4: Empty queries are silently ignored
    println!("--- Example 4: Empty query ---");
    let mut session = Session::new(RecentSearches::default());
    session.run_demo_search("   ")?;
    println!(
        "  Phase after empty submit: {:?} (no request was sent)",
        session.phase()
    );
    println!();

    // Example 5: The single-flight guard
    println!("--- Example 5: Re-entrant submission ---");
    let _ticket = session.begin_search("vermont")?;
    match session.begin_search("maine") {
        Err(FinderError::SearchInFlight) => println!("  Second submission refused while loading"),
        other => println!("  Unexpected: {other:?}"),
    }

    Ok(())
}
