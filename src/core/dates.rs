//! Post dates and date-prefixed filenames

use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use std::time::SystemTime;

use crate::core::header::PostHeader;

/// Format used for both header dates and filename prefixes
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a post's date came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostDate {
    /// A well-formed `date` in the front matter
    FromHeader(NaiveDate),
    /// The source file's modification time, used when the header date is missing or bad
    FromModified(NaiveDate),
}

impl PostDate {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::FromHeader(date) | Self::FromModified(date) => *date,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FromModified(_))
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format(DATE_FORMAT))
    }
}

/// Pick the header date when it parses, otherwise the local date of `modified`.
///
/// A header date may carry a time after the day (`2019-05-04 10:00:00 +0000`
/// or `2019-05-04T10:00:00`); only the day is used.
pub fn derive_date(header: &PostHeader, modified: SystemTime) -> PostDate {
    match header_day(&header.date) {
        Some(date) => PostDate::FromHeader(date),
        None => {
            let local: DateTime<Local> = modified.into();
            PostDate::FromModified(local.date_naive())
        }
    }
}

fn header_day(raw: &str) -> Option<NaiveDate> {
    let (date, rest) = NaiveDate::parse_and_remainder(raw.trim(), DATE_FORMAT).ok()?;
    if rest.is_empty() || rest.starts_with([' ', 'T']) {
        Some(date)
    } else {
        None
    }
}

fn date_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-?\d{2}-?\d{2}-").expect("static regex"))
}

/// Remove a leading `YYYY-MM-DD-` or `YYYYMMDD-` from `filename`
pub fn strip_date_prefix(filename: &str) -> &str {
    match date_prefix().find(filename) {
        Some(m) => &filename[m.end()..],
        None => filename,
    }
}

/// `<date>-<filename without its old date prefix>`
pub fn derive_filename(date: &PostDate, filename: &str) -> String {
    format!("{}-{}", date, strip_date_prefix(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn post_dated(date: &str) -> PostHeader {
        PostHeader {
            date: date.to_string(),
            ..Default::default()
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_header_date_wins() {
        let date = derive_date(&post_dated("2023-06-01"), SystemTime::UNIX_EPOCH);
        assert_eq!(date, PostDate::FromHeader(ymd(2023, 6, 1)));
        assert_eq!(date.to_string(), "2023-06-01");
        assert!(!date.is_fallback());
    }

    #[test]
    fn test_datetime_header_uses_its_day() {
        for raw in ["2019-05-04 10:00:00 +0000", "2019-05-04T10:00:00", " 2019-05-04 "] {
            let date = derive_date(&post_dated(raw), SystemTime::UNIX_EPOCH);
            assert_eq!(date, PostDate::FromHeader(ymd(2019, 5, 4)), "date {raw:?}");
        }
    }

    #[test]
    fn test_bad_dates_fall_back_to_mtime() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let expected = DateTime::<Local>::from(mtime).date_naive();

        for raw in ["", "not a date", "2023-13-01", "2023-06-01x", "01/06/2023"] {
            let date = derive_date(&post_dated(raw), mtime);
            assert_eq!(date, PostDate::FromModified(expected), "date {raw:?}");
            assert!(date.is_fallback());
        }
    }

    #[test]
    fn test_strip_date_prefix() {
        assert_eq!(strip_date_prefix("2024-09-01-title.md"), "title.md");
        assert_eq!(strip_date_prefix("20240601-title.md"), "title.md");
        assert_eq!(strip_date_prefix("title.md"), "title.md");
        assert_eq!(strip_date_prefix("2024-title.md"), "2024-title.md");
    }

    #[test]
    fn test_derive_filename_is_a_fixed_point() {
        let date = PostDate::FromHeader(ymd(2023, 6, 1));
        assert_eq!(
            derive_filename(&date, "2023-06-01-hello-world.md"),
            "2023-06-01-hello-world.md"
        );
        let once = derive_filename(&date, "20220101-hello-world.md");
        assert_eq!(once, "2023-06-01-hello-world.md");
        assert_eq!(derive_filename(&date, &once), once);
    }

    #[test]
    fn test_derive_filename_adds_prefix() {
        let date = PostDate::FromModified(ymd(2025, 1, 2));
        assert_eq!(derive_filename(&date, "notes.md"), "2025-01-02-notes.md");
    }
}
