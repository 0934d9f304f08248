use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object as stored in the dataset files, in file order.
pub type Document = Map<String, Value>;

/// Descriptive record for a single country.
///
/// The stored object is kept verbatim so that every field the data authors
/// add (`region`, `capital`, `historicalContext`, ...) reaches clients
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryRecord(Document);

impl CountryRecord {
    pub fn new(fields: Document) -> Self {
        Self(fields)
    }

    /// Placeholder returned for countries missing from the dataset.
    pub fn fallback(name: &str, description: &str) -> Self {
        let mut fields = Document::new();
        fields.insert("name".into(), Value::String(name.to_string()));
        fields.insert("description".into(), Value::String(description.to_string()));
        Self(fields)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Document {
        &self.0
    }

    pub fn into_fields(self) -> Document {
        self.0
    }
}

/// One entry of the ordered historical timeline.
///
/// Deserialization rejects entries without a string `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Document", into = "Document")]
pub struct TimelineEvent {
    id: String,
    fields: Document,
}

impl TimelineEvent {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &Document {
        &self.fields
    }
}

impl TryFrom<Document> for TimelineEvent {
    type Error = String;

    fn try_from(fields: Document) -> Result<Self, Self::Error> {
        let id = match fields.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(_) => return Err("timeline event `id` must be a non-empty string".into()),
            None => return Err("timeline event is missing `id`".into()),
        };
        Ok(Self { id, fields })
    }
}

impl From<TimelineEvent> for Document {
    fn from(event: TimelineEvent) -> Self {
        event.fields
    }
}

/// Detail document for a single event, read from `events/<id>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventDetailRecord(Document);

impl EventDetailRecord {
    pub fn new(fields: Document) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Document {
        &self.0
    }

    pub fn into_fields(self) -> Document {
        self.0
    }
}

/// Country name → ids of the timeline events associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryEventIndex(HashMap<String, Vec<String>>);

impl CountryEventIndex {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self(entries)
    }

    /// Event ids for `country`, empty when the country is not indexed.
    pub fn event_ids(&self, country: &str) -> &[String] {
        self.0.get(country).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn event_id_set(&self, country: &str) -> HashSet<&str> {
        self.event_ids(country).iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CountryEventIndex {
    fn default() -> Self {
        let table: [(&str, &[&str]); 5] = [
            ("Japan", &["comfort_women_wwii", "nanjing_massacre"]),
            ("China", &["nanjing_massacre"]),
            ("India", &["partition_india", "hyderabad_massacres"]),
            ("Pakistan", &["partition_india"]),
            ("Bangladesh", &["partition_india"]),
        ];
        Self(
            table
                .into_iter()
                .map(|(country, ids)| {
                    (country.to_string(), ids.iter().map(|id| id.to_string()).collect())
                })
                .collect(),
        )
    }
}
