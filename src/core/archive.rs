//! Category archive pages

use crate::core::category::{archive_filename, category_permalink, normalize_category};
use crate::core::document::DELIMITER;
use crate::core::header::double_quoted;

/// Front matter of a generated `<slug>-archive.md` page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePage {
    pub layout: String,
    pub title: String,
    pub permalink: String,
    pub category: String,
}

impl ArchivePage {
    /// Archive page for a category label as it appears in posts
    pub fn for_category(label: &str) -> Self {
        Self {
            layout: "archive".to_string(),
            title: format!("{} archive", label),
            permalink: category_permalink(label),
            category: normalize_category(label),
        }
    }

    pub fn filename(&self) -> String {
        archive_filename(&self.category)
    }

    /// Render the page. Values with spaces or uppercase letters are quoted.
    pub fn render(&self) -> String {
        let fields = [
            ("layout", &self.layout),
            ("title", &self.title),
            ("permalink", &self.permalink),
            ("category", &self.category),
        ];

        let mut lines = vec![DELIMITER.to_string()];
        for (key, value) in fields {
            lines.push(format!("{}: {}", key, quote_if_needed(value)));
        }
        lines.push(format!("{}\n", DELIMITER));
        lines.join("\n")
    }
}

fn quote_if_needed(value: &str) -> String {
    if value.contains([' ', '"', '\\']) || value != value.to_lowercase() {
        double_quoted(value)
    } else {
        value.to_string()
    }
}
