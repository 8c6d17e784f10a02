// crates/worldlens-core/src/model.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display names for a country, as the dataset ships them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// A currency entry; keyed by its ISO code inside [`Country::currencies`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Flag image references for a country.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// External map links for a country.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapLinks {
    #[serde(rename = "googleMaps", default)]
    pub google_maps: Option<String>,
    #[serde(rename = "openStreetMaps", default)]
    pub open_street_maps: Option<String>,
}

/// One country record as fetched from the remote dataset.
///
/// Treated as read-only input; `cca3` is unique within a fetched snapshot.
/// `borders` entries are weak `cca3` references and may point at codes
/// absent from the snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub cca3: String,
    pub name: CountryName,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub currencies: Option<HashMap<String, Currency>>,
    #[serde(default)]
    pub languages: Option<HashMap<String, String>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub maps: MapLinks,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> &str {
        self.subregion.as_deref().unwrap_or("")
    }

    /// Area with "absent" collapsed to zero, exactly as sorting treats it.
    pub fn area_or_zero(&self) -> f64 {
        self.area.unwrap_or(0.0)
    }

    pub fn borders(&self) -> &[String] {
        self.borders.as_deref().unwrap_or(&[])
    }

    /// Capital(s) joined for display, "N/A" when the dataset has none.
    pub fn capital_display(&self) -> String {
        match self.capital.as_deref() {
            Some(caps) if !caps.is_empty() => caps.join(", "),
            _ => "N/A".to_string(),
        }
    }

    /// Currencies as "Name (Symbol)" pairs, sorted by code for a stable
    /// rendering (the map itself has no order).
    pub fn currencies_display(&self) -> String {
        let Some(currencies) = &self.currencies else {
            return "N/A".to_string();
        };
        let mut entries: Vec<(&String, &Currency)> = currencies.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        let joined = entries
            .iter()
            .map(|(_, c)| match c.symbol.as_deref() {
                Some(symbol) => format!("{} ({})", c.name, symbol),
                None => c.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            "N/A".to_string()
        } else {
            joined
        }
    }

    /// Language names joined for display, sorted for the same reason.
    pub fn languages_display(&self) -> String {
        let Some(languages) = &self.languages else {
            return "N/A".to_string();
        };
        let mut names: Vec<&String> = languages.values().collect();
        names.sort();
        if names.is_empty() {
            "N/A".to_string()
        } else {
            names
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Group digits in threes for display: 214000000 -> "214,000,000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
