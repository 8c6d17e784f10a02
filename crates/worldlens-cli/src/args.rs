use clap::{Parser, Subcommand};
use worldlens_core::{SortField, SortOrder};

/// CLI arguments for worldlens
#[derive(Debug, Parser)]
#[command(
    name = "worldlens",
    version,
    about = "Explore the world-countries dataset: search, filter, sort, page, favorite"
)]
pub struct CliArgs {
    /// Path to the preference file (default: the per-user data directory)
    #[arg(long = "prefs", global = true)]
    pub prefs: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries matching the current (or given) filters
    List {
        /// Substring to search in common/official names (case-insensitive)
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Region to filter on ("All" disables the filter)
        #[arg(short = 'r', long)]
        region: Option<String>,

        /// Sort field: name, population, area
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort order: asc, desc
        #[arg(long)]
        order: Option<SortOrder>,

        /// 1-based page to show
        #[arg(short = 'p', long, default_value_t = 1)]
        page: usize,

        /// Countries per page (one of 8, 12, 24, 48)
        #[arg(long = "page-size")]
        page_size: Option<usize>,
    },

    /// Show the full detail card for a country by its cca3 code
    Show {
        /// Three-letter code (e.g. PRT, BRA), case-insensitive
        code: String,
    },

    /// List the regions available to filter on
    Regions,

    /// Toggle a country in the favorites set
    Fav {
        /// Three-letter code to toggle
        code: String,
    },

    /// List favorited country codes
    Favorites,
}
