//! Startup loading of the static JSON datasets.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::{CountryEventIndex, CountryRecord, DataError, Document, TimelineEvent};

pub const COUNTRIES_FILE: &str = "countries.json";
pub const COUNTRY_CODES_FILE: &str = "country_codes.json";
pub const TIMELINE_FILE: &str = "timeline.json";
pub const COUNTRY_EVENTS_FILE: &str = "country_events.json";
pub const EVENTS_DIR: &str = "events";

/// Immutable snapshot of every dataset the service answers from.
///
/// Built once at startup and shared read-only between request handlers.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) countries: Document,
    pub(crate) country_codes: Document,
    pub(crate) timeline: Vec<TimelineEvent>,
    pub(crate) country_events: CountryEventIndex,
    pub(crate) events_dir: PathBuf,
}

impl Dataset {
    /// Load all startup datasets from `data_dir`.
    ///
    /// `country_events.json` is optional; without it the built-in
    /// [`CountryEventIndex::default`] table is used.
    pub fn load(data_dir: &Path) -> Result<Self, DataError> {
        let countries: Document = read_json(&data_dir.join(COUNTRIES_FILE))?;
        let country_codes: Document = read_json(&data_dir.join(COUNTRY_CODES_FILE))?;
        let timeline_path = data_dir.join(TIMELINE_FILE);
        let timeline: Vec<TimelineEvent> = read_json(&timeline_path)?;

        let index_path = data_dir.join(COUNTRY_EVENTS_FILE);
        let country_events = if index_path.exists() {
            read_json(&index_path)?
        } else {
            tracing::debug!(
                path = %index_path.display(),
                "no country event index file, using built-in table"
            );
            CountryEventIndex::default()
        };

        check_countries(&data_dir.join(COUNTRIES_FILE), &countries)?;
        check_unique_ids(&timeline_path, &timeline)?;

        tracing::info!(
            data_dir = %data_dir.display(),
            countries = countries.len(),
            country_codes = country_codes.len(),
            timeline_events = timeline.len(),
            indexed_countries = country_events.len(),
            "datasets loaded"
        );

        Ok(Self {
            countries,
            country_codes,
            timeline,
            country_events,
            events_dir: data_dir.join(EVENTS_DIR),
        })
    }

    /// Build a snapshot from documents already in memory.
    pub fn from_parts(
        countries: Document,
        country_codes: Document,
        timeline: Vec<TimelineEvent>,
        country_events: CountryEventIndex,
        events_dir: PathBuf,
    ) -> Result<Self, DataError> {
        check_countries(Path::new(COUNTRIES_FILE), &countries)?;
        check_unique_ids(Path::new(TIMELINE_FILE), &timeline)?;
        Ok(Self {
            countries,
            country_codes,
            timeline,
            country_events,
            events_dir,
        })
    }

    pub fn events_dir(&self) -> &Path {
        &self.events_dir
    }

    pub fn country_events(&self) -> &CountryEventIndex {
        &self.country_events
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = std::fs::read(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn check_countries(path: &Path, countries: &Document) -> Result<(), DataError> {
    for (name, record) in countries {
        if !record.is_object() {
            return Err(DataError::Invalid {
                path: path.to_path_buf(),
                reason: format!("country '{name}' is not a JSON object"),
            });
        }
    }
    Ok(())
}

fn check_unique_ids(path: &Path, timeline: &[TimelineEvent]) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for event in timeline {
        if !seen.insert(event.id()) {
            return Err(DataError::Invalid {
                path: path.to_path_buf(),
                reason: format!("duplicate timeline event id '{}'", event.id()),
            });
        }
    }
    Ok(())
}

pub(crate) fn country_from_value(value: &serde_json::Value) -> Option<CountryRecord> {
    value.as_object().cloned().map(CountryRecord::new)
}
