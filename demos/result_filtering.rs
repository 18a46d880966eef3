//! Result filtering example for skifinder-rs
//!
//! This example demonstrates the filter/sort/pagination projection over a
//! raw result list.

use skifinder_rs::prelude::*;
use skifinder_rs::{project, project_windowed, Window};

fn main() -> Result<()> {
    println!("=== SkiFinder Result Filtering Example ===\n");

    let raw = demo::search("vermont")?;

    // Example 1: Default filters (sort by rating, highest first)
    println!("--- Example 1: Default filters ---");
    for resort in project(&raw, &FilterState::default()) {
        println!("- {} (⭐ {:.1})", resort.name(), resort.rating());
    }
    println!();

    // Example 2: Only highly rated resorts
    println!("--- Example 2: Minimum rating 4.7 ---");
    let picky = FilterState::default().with_min_rating(4.7);
    for resort in project(&raw, &picky) {
        println!("- {} (⭐ {:.1})", resort.name(), resort.rating());
    }
    println!();

    // Example 3: Close resorts first
    println!("--- Example 3: Within 6 km, sorted by distance ---");
    let nearby = FilterState::default()
        .with_max_distance(6.0)
        .with_sort_by(SortBy::Distance);
    for resort in project(&raw, &nearby) {
        println!("- {} (📍 {:.1} km)", resort.name(), resort.distance());
    }
    println!();

    // Example 4: The pagination window
    println!("--- Example 4: Pagination window ---");
    let mut window = Window::new();
    let view = project_windowed(&raw, &FilterState::default(), &window);
    println!(
        "Visible: {}, hidden behind 'show more': {}",
        view.visible.len(),
        view.hidden
    );
    window.show_more();
    let view = project_windowed(&raw, &FilterState::default(), &window);
    println!("After show more: visible {}", view.visible.len());

    Ok(())
}
