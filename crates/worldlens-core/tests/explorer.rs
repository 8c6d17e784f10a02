//! End-to-end exercise of the explorer pipeline through the public API:
//! scripted transport in, session out, no network and no real clock.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use worldlens_core::{
    ExplorerSession, FetchError, FileStore, MemoryStore, RegionFilter, Response, Result,
    SortField, SortOrder, Transport,
};

/// Pops one scripted response per request; repeats the last one when the
/// script runs dry.
struct ScriptedTransport {
    script: Mutex<VecDeque<Result<Response>>>,
    last: Mutex<Option<Result<Response>>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<Response>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
        }
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, _url: &str) -> Result<Response> {
        let mut script = self.script.lock().unwrap();
        match script.pop_front() {
            Some(response) => {
                *self.last.lock().unwrap() = Some(response.clone());
                response
            }
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Err(FetchError::Network("script exhausted".into()))),
        }
    }
}

fn ok(body: Vec<u8>) -> Result<Response> {
    Ok(Response { status: 200, body })
}

/// 25 synthetic countries across two regions, distinct populations.
fn big_dataset() -> Vec<u8> {
    let countries: Vec<serde_json::Value> = (0..25)
        .map(|i| {
            serde_json::json!({
                "cca3": format!("C{i:02}"),
                "name": {
                    "common": format!("Country {i:02}"),
                    "official": format!("Republic of Country {i:02}")
                },
                "population": (i as u64 + 1) * 1_000_000,
                "area": if i % 5 == 0 { serde_json::Value::Null } else { serde_json::json!(i as f64 * 100.0) },
                "region": if i % 2 == 0 { "Europe" } else { "Africa" }
            })
        })
        .collect();
    serde_json::to_vec(&countries).unwrap()
}

fn ready_session(transport: Arc<dyn Transport>) -> ExplorerSession<MemoryStore> {
    let mut session =
        ExplorerSession::with_debounce(transport, MemoryStore::new(), Duration::ZERO);
    session.fetch();
    session.wait_ready();
    session
}

#[test]
fn search_filter_sort_page_end_to_end() {
    let transport = Arc::new(ScriptedTransport::new(vec![ok(big_dataset())]));
    let mut session = ready_session(transport);
    assert_eq!(session.results().len(), 25);

    // Full set pages 25 items as 12 + 12 + 1.
    let view = session.page();
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.items.len(), 12);
    session.set_page(3);
    assert_eq!(session.page().items.len(), 1);

    // Region filter narrows and resets the page.
    session.set_region(RegionFilter::Only("Europe".to_string()));
    assert_eq!(session.current_page(), 1);
    assert_eq!(session.results().len(), 13);

    // Debounced search settles on tick.
    session.type_search("country 04");
    assert!(session.tick());
    let results = session.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].cca3, "C04");

    // Clearing the search brings the region set back, sorted by descending
    // population on demand.
    session.type_search("");
    session.tick();
    session.set_sort_field(SortField::Population);
    session.set_sort_order(SortOrder::Desc);
    let results = session.results();
    assert_eq!(results[0].cca3, "C24");
    assert!(results
        .windows(2)
        .all(|pair| pair[0].population >= pair[1].population));
}

#[test]
fn failed_fetch_then_manual_retry() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        Ok(Response {
            status: 500,
            body: Vec::new(),
        }),
        ok(big_dataset()),
    ]));
    let mut session =
        ExplorerSession::with_debounce(transport, MemoryStore::new(), Duration::ZERO);

    session.fetch();
    session.wait_ready();
    assert_eq!(
        session.error().as_deref(),
        Some("the dataset endpoint answered with HTTP 500")
    );
    assert!(session.results().is_empty());

    // Retry is a plain re-invocation; success clears the error.
    session.fetch();
    session.wait_ready();
    assert_eq!(session.error(), None);
    assert_eq!(session.results().len(), 25);
}

#[test]
fn preferences_survive_a_restart_via_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let transport = Arc::new(ScriptedTransport::new(vec![ok(big_dataset())]));
        let mut session = ExplorerSession::with_debounce(
            transport,
            FileStore::open(&path),
            Duration::ZERO,
        );
        session.fetch();
        session.wait_ready();
        session.set_region(RegionFilter::Only("Africa".to_string()));
        session.set_sort_field(SortField::Area);
        session.set_sort_order(SortOrder::Desc);
        session.toggle_favorite("C03");
        session.toggle_favorite("C11");
        session.toggle_favorite("C03");
    }

    let transport = Arc::new(ScriptedTransport::new(vec![ok(big_dataset())]));
    let mut session = ExplorerSession::with_debounce(
        transport,
        FileStore::open(&path),
        Duration::ZERO,
    );
    session.fetch();
    session.wait_ready();

    assert_eq!(
        session.query().region,
        RegionFilter::Only("Africa".to_string())
    );
    assert_eq!(session.query().sort_field, SortField::Area);
    assert_eq!(session.query().sort_order, SortOrder::Desc);
    assert!(session.is_favorite("C11"));
    assert!(!session.is_favorite("C03"));
    assert_eq!(session.results().len(), 12);
}
