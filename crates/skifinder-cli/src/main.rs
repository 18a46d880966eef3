//! skifinder-cli — Command-line interface for skifinder-core
//!
//! This binary is a terminal rendition of the ski-resort search page: type a
//! free-text location, get a filterable, sortable result grid and an
//! optional detail view with reviews.
//!
//! Usage examples
//! --------------
//!
//! - Check backend reachability
//!   $ skifinder probe
//!
//! - Search with default filters
//!   $ skifinder search "Vermont ski resorts"
//!
//! - Refine and sort
//!   $ skifinder search vermont --min-rating 4.5 --sort distance
//!
//! - Open the detail view for the second result
//!   $ skifinder search vermont --details 2
//!
//! - Work offline against the bundled sample data
//!   $ skifinder --demo search vermont
//!
//! - Show recent queries
//!   $ skifinder recent
//!
//! Backend resolution
//! ------------------
//!
//! The backend base URL comes from `--base-url`, then `SKIFINDER_BASE_URL`,
//! then the development loopback `http://localhost:5001`. When no backend is
//! reachable the CLI falls back to the bundled demo catalog and says so.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use skifinder_core::prelude::*;
use skifinder_core::model::PHOTO_WIDTH_DETAIL;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = Config::from_env();
    if let Some(base) = args.base_url.as_deref() {
        config = config.with_base_url(base);
    }

    match args.command {
        Commands::Probe => run_probe(&config),

        Commands::Search {
            query,
            min_rating,
            max_distance,
            sort,
            more,
            all,
            details,
        } => {
            let sort_by: SortBy = sort
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("--sort accepts 'rating' or 'distance'")?;
            let filters = FilterState::default()
                .with_min_rating(min_rating)
                .with_max_distance(max_distance)
                .with_sort_by(sort_by);
            run_search(&config, args.demo, &query, filters, more, all, details)
        }

        Commands::Recent => {
            let history = RecentSearches::load(&config.data_dir);
            if history.is_empty() {
                println!("No recent searches.");
            } else {
                for (i, q) in history.entries().iter().enumerate() {
                    println!("{}. {q}", i + 1);
                }
            }
            Ok(())
        }
    }
}

fn run_probe(config: &Config) -> anyhow::Result<()> {
    println!("Checking connection to {} ...", config.base_url);
    let client = SearchClient::new(config)?;
    let status = client.probe();
    match status {
        ConnectivityStatus::Connected => println!("✓ {}", status.message()),
        _ => eprintln!("✗ {}", status.message()),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_search(
    config: &Config,
    force_demo: bool,
    query: &str,
    filters: FilterState,
    more: usize,
    all: bool,
    details: Option<usize>,
) -> anyhow::Result<()> {
    let history = RecentSearches::load(&config.data_dir);
    let mut session = Session::new(history);
    session.set_filters(filters);

    let client = SearchClient::new(config)?;
    let use_demo = if force_demo {
        session.set_status(ConnectivityStatus::Demo);
        true
    } else {
        match session.check_backend(&client) {
            ConnectivityStatus::Error => {
                eprintln!("Backend unavailable. Using demo data for demonstration.");
                session.set_status(ConnectivityStatus::Demo);
                true
            }
            _ => false,
        }
    };

    if use_demo {
        session.run_demo_search(query)?;
    } else {
        session.run_search(&client, query)?;
    }

    match session.phase() {
        Phase::Idle => {
            // Empty query: nothing was dispatched.
            eprintln!("Nothing to search for.");
            return Ok(());
        }
        Phase::Errored => {
            eprintln!("{}", session.error().unwrap_or("Search failed."));
            return Ok(());
        }
        _ => {}
    }

    session
        .history()
        .save(&config.data_dir)
        .context("failed to persist recent searches")?;

    // Unfold the pagination window before rendering.
    if all {
        while session.displayed().hidden > 0 {
            session.show_more();
        }
    } else {
        for _ in 0..more {
            session.show_more();
        }
    }

    let place_ids = render_grid(&session, query);

    if let Some(index) = details {
        let id = index
            .checked_sub(1)
            .and_then(|i| place_ids.get(i))
            .with_context(|| format!("--details {index} is out of range"))?
            .clone();
        if session.select(&id) {
            if let Some(resort) = session.selected() {
                render_detail(resort, config);
            }
        }
    }

    Ok(())
}

/// Print the result grid; returns the place ids in display order so a
/// detail selection can refer to them by index.
fn render_grid(session: &Session, query: &str) -> Vec<String> {
    let view = session.displayed();
    if view.is_empty() {
        println!("No resorts matched \"{query}\" with the current filters.");
        return Vec::new();
    }

    println!(
        "Found {} resort(s) for \"{query}\":",
        view.visible.len() + view.hidden
    );
    for (i, resort) in view.visible.iter().enumerate() {
        println!(
            "{:>2}. 🏔️  {} - {} (⭐ {:.1}, 📍 {:.1} km)",
            i + 1,
            resort.name(),
            resort.address(),
            resort.rating(),
            resort.distance()
        );
    }
    if view.hidden > 0 {
        println!("    ... and {} more (pass --more N or --all)", view.hidden);
    }

    view.visible.iter().map(|r| r.place_id.clone()).collect()
}

fn render_detail(resort: &ResortRecord, config: &Config) {
    println!();
    println!("=== {} ===", resort.name());
    println!("{}", resort.address());
    println!("⭐ {:.1}   📍 {:.1} km", resort.rating(), resort.distance());
    if let Some(website) = resort.website() {
        println!("Website: {website}");
    }
    if let Some(map) = resort.map_url() {
        println!("Map: {map}");
    }
    if let Some(photo) = resort.photo_url(PHOTO_WIDTH_DETAIL, config.maps_api_key.as_deref()) {
        println!("Photo: {photo}");
    }
    if !resort.reviews().is_empty() {
        println!("Recent reviews:");
        for review in resort.reviews().iter().take(3) {
            println!("  ⭐ {:.0}  {}", review.rating, review.text);
            println!("      - {}", review.author_name);
        }
    }
}
