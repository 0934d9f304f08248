//! HTML page templates.
//!
//! Templates are plain HTML files with `{{ name }}` placeholders filled from
//! a JSON object. `{{ name }}` inserts the HTML-escaped value and
//! `{{ name|json }}` inserts the value as JSON, safe to embed in a
//! `<script type="application/json">` block. Unknown names render empty.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Pages served by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Index,
    WorldMap,
    Timeline,
    CountryDetail,
    EventDetail,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Index,
        Page::WorldMap,
        Page::Timeline,
        Page::CountryDetail,
        Page::EventDetail,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::WorldMap => "world_map.html",
            Self::Timeline => "timeline.html",
            Self::CountryDetail => "country_detail.html",
            Self::EventDetail => "event_detail.html",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Every page template, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Views {
    templates: HashMap<Page, String>,
}

impl Views {
    pub fn load(templates_dir: &Path) -> Result<Self, ViewError> {
        let mut templates = HashMap::new();
        for page in Page::ALL {
            let path = templates_dir.join(page.file_name());
            let source = std::fs::read_to_string(&path)
                .map_err(|source| ViewError::Io { path, source })?;
            templates.insert(page, source);
        }
        tracing::info!(
            templates_dir = %templates_dir.display(),
            pages = templates.len(),
            "page templates loaded"
        );
        Ok(Self { templates })
    }

    pub fn from_templates(templates: HashMap<Page, String>) -> Self {
        Self { templates }
    }

    pub fn render(&self, page: Page, context: &Map<String, Value>) -> String {
        match self.templates.get(&page) {
            Some(template) => render_template(template, context),
            None => {
                tracing::warn!(page = page.file_name(), "no template registered for page");
                String::new()
            }
        }
    }
}

pub fn render_template(template: &str, context: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let expr = after[..end].trim();
        let (name, as_json) = match expr.split_once('|') {
            Some((name, filter)) => (name.trim(), filter.trim() == "json"),
            None => (expr, false),
        };
        let value = context.get(name).unwrap_or(&Value::Null);
        if as_json {
            out.push_str(&script_safe_json(value));
        } else {
            out.push_str(&escape_html(&display_value(value)));
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn script_safe_json(value: &Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
