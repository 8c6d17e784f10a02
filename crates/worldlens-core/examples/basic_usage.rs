//! Basic usage example for worldlens-core
//!
//! This example demonstrates how to:
//! - Fetch the live country dataset
//! - Search and filter it
//! - Page through the results
//! - Favorite a country
//!
//! It talks to the real endpoint, so it needs network access.

use std::sync::Arc;
use std::time::Duration;

use worldlens_core::{
    ExplorerSession, HttpTransport, MemoryStore, RegionFilter, SortField, SortOrder,
};

fn main() {
    println!("=== worldlens-core Basic Usage Example ===\n");

    let mut session =
        ExplorerSession::with_debounce(Arc::new(HttpTransport), MemoryStore::new(), Duration::ZERO);

    println!("Fetching the country dataset...");
    session.fetch();
    session.wait_ready();
    if let Some(message) = session.error() {
        eprintln!("fetch failed: {message}");
        std::process::exit(1);
    }
    println!("✓ Dataset ready: {} countries\n", session.results().len());

    // Example 1: first page of the alphabetical grid
    println!("--- Example 1: First page, sorted by name ---");
    let view = session.page();
    for country in &view.items {
        println!("{}  {}", country.cca3, country.common_name());
    }
    println!("(page 1 of {})\n", view.total_pages);

    // Example 2: filter by region
    println!("--- Example 2: Oceania only ---");
    session.set_region(RegionFilter::Only("Oceania".to_string()));
    println!("Oceania has {} countries", session.results().len());
    println!();

    // Example 3: search within the region
    println!("--- Example 3: Search 'new' within Oceania ---");
    session.type_search("new");
    session.tick();
    for country in session.results() {
        println!("{}  {}", country.cca3, country.common_name());
    }
    println!();

    // Example 4: biggest countries by area
    println!("--- Example 4: Largest countries by area ---");
    session.type_search("");
    session.tick();
    session.set_region(RegionFilter::All);
    session.set_sort_field(SortField::Area);
    session.set_sort_order(SortOrder::Desc);
    for country in session.results().iter().take(5) {
        println!("{}  {:>12.0} km²", country.common_name(), country.area_or_zero());
    }
    println!();

    // Example 5: favorites
    println!("--- Example 5: Favorites ---");
    session.toggle_favorite("NZL");
    println!("NZL favorited: {}", session.is_favorite("NZL"));
    session.toggle_favorite("NZL");
    println!("NZL after second toggle: {}", session.is_favorite("NZL"));
}
