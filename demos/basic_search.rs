//! Basic usage example for skifinder-rs
//!
//! This example demonstrates how to:
//! - Run a search against the bundled demo catalog
//! - Project the results through the default filters
//! - Inspect the recent-search history

use skifinder_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== SkiFinder Basic Search Example ===\n");

    // A session owns the raw results, the filter state and the history.
    let mut session = Session::new(RecentSearches::default());
    session.set_status(ConnectivityStatus::Demo);

    // Example 1: Search the demo catalog
    println!("--- Example 1: Search for Vermont resorts ---");
    session.run_demo_search("Vermont ski resorts")?;
    let view = session.displayed();
    println!("Found {} resorts:", view.visible.len() + view.hidden);
    for (i, resort) in view.visible.iter().enumerate() {
        println!(
            "{}. {} (⭐ {:.1}, 📍 {:.1} km)",
            i + 1,
            resort.name(),
            resort.rating(),
            resort.distance()
        );
    }
    println!();

    // Example 2: A second search replaces the results wholesale
    println!("--- Example 2: Search for Maine resorts ---");
    session.run_demo_search("maine")?;
    for resort in session.displayed().visible {
        println!("- {} ({})", resort.name(), resort.address());
    }
    println!();

    // Example 3: The history keeps the latest queries, newest first
    println!("--- Example 3: Recent searches ---");
    for (i, q) in session.history().entries().iter().enumerate() {
        println!("{}. {q}", i + 1);
    }

    Ok(())
}
