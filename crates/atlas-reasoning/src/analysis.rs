use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ReasoningError;

/// Structured analysis of one paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: String,
    pub claims: Vec<String>,
    pub assumptions: Vec<String>,
}

/// Validate raw model output against the [`Analysis`] schema.
///
/// Models often wrap JSON in a Markdown code fence even when told not to,
/// so a surrounding fence is stripped before parsing.
pub fn parse_analysis(raw: &str) -> Result<Analysis, ReasoningError> {
    let body = strip_code_fence(raw.trim());
    serde_json::from_str(body).map_err(|e| ReasoningError::Schema(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return text;
    };
    // Drop an info string such as `json` on the opening fence line.
    match inner.split_once('\n') {
        Some((info, rest)) if !info.trim_start().starts_with('{') => rest.trim(),
        Some(_) => inner.trim(),
        // Single-line fence, e.g. ```json{"summary": ...}```.
        None => inner.trim_start_matches(|c: char| c.is_ascii_alphabetic()).trim(),
    }
}

/// Write `analysis` as pretty-printed JSON with four-space indentation.
pub fn write_analysis(path: &Path, analysis: &Analysis) -> Result<(), ReasoningError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    analysis
        .serialize(&mut ser)
        .map_err(ReasoningError::Encode)?;
    std::fs::write(path, buf).map_err(|source| ReasoningError::Io {
        path: path.to_path_buf(),
        source,
    })
}
