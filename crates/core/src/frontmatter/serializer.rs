//! Frontmatter serialization back to markdown.

use serde_yaml::Mapping;

/// Write `fields` as a delimited frontmatter block followed by `body`.
///
/// Keys keep the insertion order of the mapping. An empty mapping yields the
/// body alone.
pub fn serialize(fields: &Mapping, body: &str) -> Result<String, serde_yaml::Error> {
    if fields.is_empty() {
        return Ok(body.to_string());
    }
    let yaml = serde_yaml::to_string(fields)?;
    Ok(format!("---\n{yaml}---\n\n{body}"))
}
