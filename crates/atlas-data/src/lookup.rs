//! Read-only lookups against a loaded [`Dataset`].

use crate::dataset::country_from_value;
use crate::{CountryRecord, DataError, Dataset, Document, EventDetailRecord, TimelineEvent};

pub const FALLBACK_DESCRIPTION: &str = "No additional data available for this country.";

impl Dataset {
    /// Exact-match country lookup. Unknown names get a placeholder record.
    pub fn country(&self, name: &str) -> CountryRecord {
        self.countries
            .get(name)
            .and_then(country_from_value)
            .unwrap_or_else(|| CountryRecord::fallback(name, FALLBACK_DESCRIPTION))
    }

    pub fn country_codes(&self) -> &Document {
        &self.country_codes
    }

    /// All timeline events in file order.
    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    /// Timeline events indexed for `country`, in timeline order.
    pub fn related_events(&self, country: &str) -> Vec<TimelineEvent> {
        let ids = self.country_events.event_id_set(country);
        if ids.is_empty() {
            return Vec::new();
        }
        self.timeline
            .iter()
            .filter(|event| ids.contains(event.id()))
            .cloned()
            .collect()
    }

    /// Read `events/<id>.json` from disk. Not cached between calls.
    pub async fn event_detail(&self, event_id: &str) -> Result<EventDetailRecord, DataError> {
        if !is_safe_event_id(event_id) {
            return Err(DataError::NotFound(event_id.to_string()));
        }

        let path = self.events_dir.join(format!("{event_id}.json"));
        let read = tokio::fs::read(&path).await;
        let raw = match read {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataError::NotFound(event_id.to_string()));
            }
            Err(source) => return Err(DataError::Io { path, source }),
        };

        let fields: Document =
            serde_json::from_slice(&raw).map_err(|source| DataError::Parse { path, source })?;
        Ok(EventDetailRecord::new(fields))
    }
}

/// Event ids become file names, so only a single plain path component is
/// accepted.
pub fn is_safe_event_id(event_id: &str) -> bool {
    !event_id.is_empty()
        && event_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
