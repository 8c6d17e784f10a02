// crates/worldlens-core/src/lib.rs

//! worldlens-core
//! ==============
//!
//! Client-side country explorer core. The dataset is fetched once per
//! session from a public endpoint; everything the user then does —
//! searching, region filtering, sorting, paging, favoriting, detail
//! lookup — is a pure derivation over that in-memory snapshot.
//!
//! The pieces, leaf-first:
//!
//! - [`prefs`] — persisted key-value preferences behind a swappable store.
//! - [`debounce`] — trailing debounce for keystroke-level search input.
//! - [`fetch`] — single-flight dataset retrieval; last request issued wins.
//! - [`query`] — pure filter + stable sort over the snapshot.
//! - [`page`] — pagination slicing.
//! - [`favorites`] — the persisted favorites set.
//! - [`session`] — the orchestrator a view layer drives.

pub mod debounce;
pub mod error;
pub mod favorites;
pub mod fetch;
pub mod model;
pub mod page;
pub mod prefs;
pub mod query;
pub mod session;

// Re-exports
pub use crate::error::{FetchError, Result};
#[cfg(feature = "remote")]
pub use crate::fetch::HttpTransport;
pub use crate::fetch::{DatasetFetcher, FetchState, Response, Transport, DATASET_URL};
pub use crate::model::{Country, CountryName, Currency, Flags, MapLinks};
pub use crate::page::{slice, Page};
pub use crate::prefs::{FileStore, MemoryStore, PrefStore};
pub use crate::query::{apply, Query, RegionFilter, SortField, SortOrder, REGIONS};
pub use crate::session::{ExplorerSession, PageView, DEFAULT_PAGE_SIZE, PAGE_SIZES};
