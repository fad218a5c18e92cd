//! Utility functions for folio

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Number of article cards shown on one listing page.
pub const POSTS_PER_PAGE: usize = 14;

/// Parses a front matter timestamp.
///
/// Accepts RFC 3339 (`2022-01-03T10:00:00+09:00`), date and time with
/// space or `T` separator, and plain dates. Offsets are dropped: the local
/// wall clock time written by the author is kept.
///
/// # Arguments
///
/// * `value`: Timestamp as written in the front matter
///
/// # Returns
///
/// Parsed timestamp, or None if no known format matches
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_local());
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Formats a front matter timestamp as `YYYY-MM-DD` for display.
///
/// Unparseable values are shown as written.
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|datetime| datetime.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| value.trim().to_string())
}

/// Extracts the year of a front matter timestamp.
pub fn year_of(value: &str) -> Option<i32> {
    parse_timestamp(value).map(|datetime| datetime.year())
}

/// Calculates how many listing pages a number of posts needs.
///
/// # Arguments
///
/// * `total`: Number of posts
/// * `per_page`: Posts shown per page (must be non zero)
///
/// # Returns
///
/// `floor((total - 1) / per_page) + 1`, or 0 when there are no posts
pub fn page_count(total: usize, per_page: usize) -> usize {
    if total == 0 || per_page == 0 {
        return 0;
    }
    (total - 1) / per_page + 1
}

/// Returns the items shown on a 1-based page.
///
/// Out of range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}
