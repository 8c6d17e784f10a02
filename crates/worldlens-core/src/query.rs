// crates/worldlens-core/src/query.rs

//! # Query Engine
//!
//! Pure derivation of the visible result set: region filter, then name
//! search, then a stable sort. No state, no side effects; everything here
//! borrows from the dataset snapshot it is given.

use crate::model::Country;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Canonical region names offered by the filter control (the "All"
/// sentinel is represented by [`RegionFilter::All`], not listed here).
pub const REGIONS: [&str; 6] = [
    "Africa", "Americas", "Asia", "Europe", "Oceania", "Antarctic",
];

/// Region filter: a named region matched exactly (case-sensitive), or the
/// "All" sentinel that disables the filter. Serializes to the plain wire
/// string so the persisted preference round-trips.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(name) => name == region,
        }
    }
}

impl From<String> for RegionFilter {
    fn from(s: String) -> Self {
        if s == "All" {
            RegionFilter::All
        } else {
            RegionFilter::Only(s)
        }
    }
}

impl From<RegionFilter> for String {
    fn from(filter: RegionFilter) -> Self {
        match filter {
            RegionFilter::All => "All".to_string(),
            RegionFilter::Only(name) => name,
        }
    }
}

/// Key the result set is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Population,
    Area,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "population" => Ok(SortField::Population),
            "area" => Ok(SortField::Area),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// What the user is currently asking of the dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pub search: String,
    pub region: RegionFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

/// Derive the visible result set for `query` against a dataset snapshot.
///
/// Deterministic: same inputs, same output, including the order of ties.
/// Filters run first (region, then search — they commute, but the order is
/// fixed); the sort always runs last. The search is a case-insensitive
/// substring match against either the common or the official name.
pub fn apply<'a>(dataset: &'a [Country], query: &Query) -> Vec<&'a Country> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<&Country> = dataset
        .iter()
        .filter(|c| query.region.matches(&c.region))
        .filter(|c| {
            needle.is_empty()
                || c.name.common.to_lowercase().contains(&needle)
                || c.name.official.to_lowercase().contains(&needle)
        })
        .collect();

    // Vec::sort_by is stable; the equal-key ordering guarantee relies on it.
    out.sort_by(|a, b| {
        let ord = match query.sort_field {
            SortField::Name => a.name.common.cmp(&b.name.common),
            SortField::Population => a.population.cmp(&b.population),
            SortField::Area => a
                .area_or_zero()
                .partial_cmp(&b.area_or_zero())
                .unwrap_or(Ordering::Equal),
        };
        match query.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}
