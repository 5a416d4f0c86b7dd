//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use pha_impact::{NeoRecord, SimulationConfig, Simulator, load_catalog};

/// Path of a file under `tests/data`.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

/// The NeoWs feed-page fixture.
pub fn feed_catalog() -> Vec<NeoRecord> {
    load_catalog(data_path("neows_feed_sample.json")).expect("fixture catalog should parse")
}

/// Fixed "now" so approach-recency tie-breaks are reproducible.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap()
}

/// Simulator with default tunables and a pinned reference time.
pub fn simulator() -> Simulator {
    Simulator::new(SimulationConfig::default().with_reference_time(reference_time()))
}
