use clap::{Parser, Subcommand};

/// CLI arguments for skifinder-cli
#[derive(Debug, Parser)]
#[command(
    name = "skifinder",
    version,
    about = "CLI for searching ski resorts near a free-text location"
)]
pub struct CliArgs {
    /// Backend base URL (default: $SKIFINDER_BASE_URL, then http://localhost:5001)
    #[arg(short = 'b', long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Skip the backend entirely and serve the bundled demo catalog
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a backend endpoint is reachable
    Probe,

    /// Search for ski resorts matching a location query
    Search {
        /// Free-text location query (e.g. "Vermont ski resorts")
        query: String,

        /// Minimum rating, 0-5
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,

        /// Maximum distance in km, 0-200
        #[arg(long, default_value_t = 100.0)]
        max_distance: f64,

        /// Sort order: rating (highest first) or distance (closest first)
        #[arg(long, default_value = "rating")]
        sort: String,

        /// Unfold N extra "show more" pages beyond the first 12 results
        #[arg(long, default_value_t = 0)]
        more: usize,

        /// Show every filtered result, ignoring pagination
        #[arg(long)]
        all: bool,

        /// Print the detail view for the N-th displayed result (1-based)
        #[arg(long)]
        details: Option<usize>,
    },

    /// List recent search queries
    Recent,
}
