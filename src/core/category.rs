//! Category labels to filesystem-safe slugs
//!
//! Slugs are built from lowercase ASCII alphanumerics and single hyphens, with
//! a small override table for labels whose punctuation carries meaning.

use regex::Regex;
use std::sync::OnceLock;

/// Labels that would collapse into something unrecognizable under the generic rule
pub static CATEGORY_OVERRIDES: &[(&str, &str)] = &[("c++", "cpp"), ("c#", "csharp")];

fn non_slug_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static regex"))
}

/// Lowercase `s` and collapse every run of non `[a-z0-9]` characters into one hyphen.
///
/// Leading and trailing hyphens are trimmed, so a string without any ASCII
/// alphanumerics yields an empty slug.
pub fn sanitize_filename(s: &str) -> String {
    let lowered = s.to_lowercase();
    non_slug_run()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Map a free-form category label to its canonical slug
pub fn normalize_category(label: &str) -> String {
    let lowered = label.to_lowercase();
    CATEGORY_OVERRIDES
        .iter()
        .find(|(from, _)| *from == lowered)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| sanitize_filename(&lowered))
}

/// Site permalink of the archive page for `label`
pub fn category_permalink(label: &str) -> String {
    format!("/{}-archive.html", normalize_category(label))
}

/// File name of the archive page for `label`
pub fn archive_filename(label: &str) -> String {
    format!("{}-archive.md", normalize_category(label))
}
