/// Build the user prompt asking for a strict-JSON analysis of `paragraph`.
pub fn build_prompt(paragraph: &str) -> String {
    format!(
        r#"
Return your response as STRICT JSON with the following schema:

{{
  "summary": "2–3 sentence summary",
  "claims": ["claim 1", "claim 2", "..."],
  "assumptions": ["assumption 1", "assumption 2", "..."]
}}

Paragraph:
"""
{paragraph}
"""
"#
    )
}
