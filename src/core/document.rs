//! Core document model and the front matter text codec
//!
//! A document on disk is a `---` delimiter line, a YAML mapping, another `---`
//! line, then the markdown body. Parsing keeps the full mapping; writing a
//! post emits only the canonical keys, in canonical order.

use crate::core::header::{Header, PostHeader, REQUIRED_KEYS};
use crate::error::{Result, TidyError};
use serde_yaml::{Mapping, Value};

/// Delimiter line around the front matter block
pub const DELIMITER: &str = "---";

/// A markdown document split into its front matter and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    header: Header,
    body: String,
}

impl Document {
    pub fn new(header: Header, body: impl Into<String>) -> Self {
        Self {
            header,
            body: body.into(),
        }
    }

    /// Parse `raw` into a document.
    ///
    /// The text must start with a delimiter line. Everything up to the next
    /// line consisting of the delimiter alone is loaded as a YAML mapping;
    /// the rest, trimmed, is the body. An empty block yields an empty header.
    pub fn parse(raw: &str) -> Result<Self> {
        let (first, rest) = split_line(raw);
        if first.trim_end() != DELIMITER {
            return Err(TidyError::MissingFrontMatter);
        }

        let (yaml, body) = split_at_closing_delimiter(rest)
            .ok_or_else(|| TidyError::malformed_header("missing closing delimiter"))?;

        let header = load_mapping(yaml)?;
        Ok(Self::new(header, body.trim()))
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Normalized post header of this document
    pub fn post_header(&self) -> PostHeader {
        self.header.normalize()
    }

    /// Case-insensitive keyword match against the title and the body
    pub fn mentions(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        let title = self
            .header
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default();
        title.to_lowercase().contains(&needle) || self.body.to_lowercase().contains(&needle)
    }
}

/// Serialize a normalized post header and body into on-disk text
pub fn format_post(header: &PostHeader, body: &str) -> String {
    let mut lines = Vec::with_capacity(REQUIRED_KEYS.len() + 3);
    lines.push(DELIMITER.to_string());
    for key in REQUIRED_KEYS {
        if let Some(value) = header.render_field(key) {
            lines.push(format!("{}: {}", key, value));
        }
    }
    lines.push(format!("{}\n", DELIMITER));
    lines.push(body.to_string());
    lines.join("\n")
}

fn split_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    }
}

/// Split `text` at the first line that is exactly the delimiter
fn split_at_closing_delimiter(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Some((&text[..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn load_mapping(yaml: &str) -> Result<Header> {
    if yaml.trim().is_empty() {
        return Ok(Header::default());
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => Ok(Header::new(map)),
        Ok(Value::Null) => Ok(Header::new(Mapping::new())),
        Ok(other) => Err(TidyError::malformed_header(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
        Err(e) => Err(TidyError::malformed_header(e.to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
