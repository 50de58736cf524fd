/// Test helpers shared by the integration tests
use chrono::NaiveDate;
use screamsheet_lib::modules::provider::infrastructure::DataSource;
use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

/// Replays the recorded payloads under tests/fixtures
pub fn fixture_source() -> DataSource {
    DataSource::snapshot(fixtures_dir())
}

/// A snapshot directory with nothing in it
pub fn empty_source(dir: &tempfile::TempDir) -> DataSource {
    DataSource::snapshot(dir.path())
}

pub fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("valid test date")
}
