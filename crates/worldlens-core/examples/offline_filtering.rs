//! Offline filtering example for worldlens-core
//!
//! Runs the pure pipeline pieces — query engine, pagination slicer,
//! favorites toggle — against a hand-built snapshot, no network needed.

use std::collections::HashSet;

use worldlens_core::{
    apply, slice, Country, CountryName, Query, RegionFilter, SortField, SortOrder,
};

fn country(cca3: &str, common: &str, region: &str, population: u64, area: f64) -> Country {
    Country {
        cca3: cca3.to_string(),
        name: CountryName {
            common: common.to_string(),
            official: common.to_string(),
        },
        population,
        area: Some(area),
        region: region.to_string(),
        ..Country::default()
    }
}

fn main() {
    let dataset = vec![
        country("PRT", "Portugal", "Europe", 10_000_000, 92_212.0),
        country("ESP", "Spain", "Europe", 47_000_000, 505_990.0),
        country("BRA", "Brazil", "Americas", 214_000_000, 8_515_767.0),
        country("ARG", "Argentina", "Americas", 45_000_000, 2_780_400.0),
        country("JPN", "Japan", "Asia", 125_000_000, 377_975.0),
    ];

    println!("--- Europe, by population descending ---");
    let query = Query {
        region: RegionFilter::Only("Europe".to_string()),
        sort_field: SortField::Population,
        sort_order: SortOrder::Desc,
        ..Query::default()
    };
    for c in apply(&dataset, &query) {
        println!("{}  {}", c.cca3, c.common_name());
    }

    println!("\n--- Search 'ar' anywhere ---");
    let query = Query {
        search: "ar".to_string(),
        ..Query::default()
    };
    for c in apply(&dataset, &query) {
        println!("{}  {}", c.cca3, c.common_name());
    }

    println!("\n--- Two per page ---");
    let results = apply(&dataset, &Query::default());
    let mut page_no = 1;
    loop {
        let page = slice(&results, page_no, 2);
        if page.items.is_empty() {
            break;
        }
        let names: Vec<&str> = page.items.iter().map(|c| c.common_name()).collect();
        println!("page {page_no}/{}: {}", page.total_pages, names.join(", "));
        page_no += 1;
    }

    println!("\n--- Favorites toggle ---");
    let favorites = HashSet::new();
    let favorites = worldlens_core::favorites::toggle(&favorites, "JPN");
    println!("after toggle: {favorites:?}");
    let favorites = worldlens_core::favorites::toggle(&favorites, "JPN");
    println!("after double toggle: {favorites:?}");
}
