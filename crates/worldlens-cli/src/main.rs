//! worldlens — country explorer for the terminal
//!
//! This binary is the stand-in view layer for `worldlens-core`: it wires
//! terminal commands onto the explorer session and prints what comes back.
//! All the behavior (fetching, filtering, sorting, paging, favorites,
//! persistence) lives in the core crate.
//!
//! Usage examples
//! --------------
//!
//! - First page, defaults restored from the preference file
//!   $ worldlens list
//!
//! - Search and filter (both persist for the next run where applicable)
//!   $ worldlens list --search port --region Europe
//!   $ worldlens list --sort population --order desc --page 2
//!
//! - Detail card for one country
//!   $ worldlens show PRT
//!
//! - Favorites
//!   $ worldlens fav BRA
//!   $ worldlens favorites
//!
//! The dataset is fetched fresh from the public endpoint on every data
//! command; region, sort, and favorites persist between runs in a small
//! JSON preference file (see `--prefs`).

mod args;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;
use directories::ProjectDirs;
use worldlens_core::model::group_thousands;
use worldlens_core::{ExplorerSession, FileStore, HttpTransport, RegionFilter, PAGE_SIZES};

use crate::args::{CliArgs, Commands};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let prefs_path = args
        .prefs
        .map(PathBuf::from)
        .unwrap_or_else(default_prefs_path);
    let store = FileStore::open(prefs_path);

    // One-shot invocations have no keystroke stream to smooth out.
    let mut session =
        ExplorerSession::with_debounce(Arc::new(HttpTransport), store, Duration::ZERO);

    match args.command {
        Commands::List {
            search,
            region,
            sort,
            order,
            page,
            page_size,
        } => {
            if let Some(region) = region {
                session.set_region(RegionFilter::from(region));
            }
            if let Some(field) = sort {
                session.set_sort_field(field);
            }
            if let Some(order) = order {
                session.set_sort_order(order);
            }
            if let Some(search) = search {
                session.type_search(search);
            }

            if let Some(size) = page_size {
                if !PAGE_SIZES.contains(&size) {
                    bail!(
                        "page size {size} is not offered; pick one of {PAGE_SIZES:?}"
                    );
                }
            }

            fetch_or_bail(&mut session)?;
            session.tick();
            if let Some(size) = page_size {
                session.set_page_size(size);
            }
            session.set_page(page);

            let view = session.page();
            if view.items.is_empty() {
                println!("No countries match. Try adjusting the search or filters.");
                return Ok(());
            }
            for country in &view.items {
                let marker = if session.is_favorite(&country.cca3) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {}  {:<32} {:<10} pop {:>15}",
                    marker,
                    country.cca3,
                    country.common_name(),
                    country.region(),
                    group_thousands(country.population),
                );
            }
            if view.is_paged() {
                println!(
                    "\nPage {} of {} ({} per page)",
                    session.current_page(),
                    view.total_pages,
                    session.page_size()
                );
            }
        }

        Commands::Show { code } => {
            fetch_or_bail(&mut session)?;
            match session.find(&code) {
                Some(country) => {
                    println!("{}", country.official_name());
                    println!("Common name: {}", country.common_name());
                    println!("Code: {}", country.cca3);
                    println!(
                        "Capital & Region: {}, {} {}",
                        country.capital_display(),
                        country.region(),
                        if country.subregion().is_empty() {
                            String::new()
                        } else {
                            format!("({})", country.subregion())
                        }
                    );
                    println!("Population: {}", group_thousands(country.population));
                    println!("Area: {:.0} km²", country.area_or_zero());
                    println!("Currencies: {}", country.currencies_display());
                    println!("Languages: {}", country.languages_display());
                    if !country.borders().is_empty() {
                        println!("Borders: {}", country.borders().join(", "));
                    }
                    println!("Flag: {}", country.flags.svg);
                    if let Some(maps) = country.maps.google_maps.as_deref() {
                        println!("Map: {maps}");
                    }
                    println!(
                        "Favorite: {}",
                        if session.is_favorite(&country.cca3) {
                            "yes"
                        } else {
                            "no"
                        }
                    );
                }
                None => eprintln!("No country found for: {code}"),
            }
        }

        Commands::Regions => {
            println!("All");
            for region in session.regions() {
                println!("{region}");
            }
        }

        Commands::Fav { code } => {
            let code = code.to_uppercase();
            session.toggle_favorite(&code);
            if session.is_favorite(&code) {
                println!("Added {code} to favorites.");
            } else {
                println!("Removed {code} from favorites.");
            }
        }

        Commands::Favorites => {
            let mut codes: Vec<&String> = session.favorites().iter().collect();
            codes.sort();
            if codes.is_empty() {
                println!("No favorites yet. Add one with: worldlens fav <CODE>");
            }
            for code in codes {
                println!("{code}");
            }
        }
    }

    Ok(())
}

/// Run the fetch to settlement; a failed attempt becomes the process error
/// (the retry affordance here is simply running the command again).
fn fetch_or_bail(session: &mut ExplorerSession<FileStore>) -> anyhow::Result<()> {
    session.fetch();
    session.wait_ready();
    if let Some(message) = session.error() {
        bail!(message);
    }
    Ok(())
}

fn default_prefs_path() -> PathBuf {
    ProjectDirs::from("", "", "worldlens")
        .map(|dirs| dirs.data_dir().join("prefs.json"))
        .unwrap_or_else(|| PathBuf::from("worldlens-prefs.json"))
}
