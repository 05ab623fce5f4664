//! Front matter headers and post header normalization
//!
//! [`Header`] keeps the mapping exactly as it was loaded from YAML, in source
//! order. [`PostHeader`] is the fixed six-field shape every post is normalized
//! into before it is written back.

use serde_yaml::{Mapping, Value};

/// Keys every post carries, in the order they are written
pub const REQUIRED_KEYS: [&str; 6] = ["layout", "title", "date", "author", "categories", "tags"];

/// A loaded front matter mapping, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    entries: Mapping,
}

impl Header {
    pub fn new(entries: Mapping) -> Self {
        Self { entries }
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Top-level keys in source order, skipping non-string keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// Category labels as written, whether given as a single string or a list
    pub fn categories(&self) -> Vec<String> {
        match self.get("categories") {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(value) => scalar_to_string(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Normalize into the canonical post shape. Never fails: absent or
    /// malformed values degrade to empty strings and empty lists.
    pub fn normalize(&self) -> PostHeader {
        PostHeader {
            layout: self.text_field("layout"),
            title: self.text_field("title"),
            date: self.text_field("date"),
            author: self.text_field("author"),
            categories: self.list_field("categories"),
            tags: self.list_field("tags"),
        }
    }

    fn text_field(&self, key: &str) -> String {
        self.get(key)
            .and_then(scalar_to_string)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    fn list_field(&self, key: &str) -> Vec<String> {
        self.get(key).map(list_value).unwrap_or_default()
    }
}

impl From<Mapping> for Header {
    fn from(entries: Mapping) -> Self {
        Self::new(entries)
    }
}

fn list_value(value: &Value) -> Vec<String> {
    match value {
        Value::String(single) => vec![single.to_lowercase()],
        Value::Sequence(items) => items
            .iter()
            .filter_map(scalar_to_string)
            .map(|s| s.to_lowercase())
            .collect(),
        Value::Tagged(tagged) => list_value(&tagged.value),
        _ => Vec::new(),
    }
}

/// Render a scalar the way it would read in the header; `null` and
/// collections have no scalar form.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// A post header in canonical form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostHeader {
    pub layout: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl PostHeader {
    /// Rendered value of a canonical key, as it appears after `key: `
    pub fn render_field(&self, key: &str) -> Option<String> {
        let rendered = match key {
            "layout" => self.layout.clone(),
            "title" => double_quoted(&self.title),
            "date" => self.date.clone(),
            "author" => self.author.clone(),
            "categories" => render_list(&self.categories),
            "tags" => render_list(&self.tags),
            _ => return None,
        };
        Some(rendered)
    }
}

/// YAML double-quoted scalar for `value`
pub fn double_quoted(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
