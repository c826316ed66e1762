//! Date formatting for content dates (`YYYY-MM-DD` or RFC 3339)

use chrono::{DateTime, NaiveDate};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// `2024-03-15` → `March 2024`
pub fn format_month(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format("%B %Y").to_string())
}

/// `2024-03-05` → `March 5, 2024`
pub fn format_day(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format("%B %-d, %Y").to_string())
}

/// Sort key for content dates; unparseable dates sort oldest
pub(crate) fn sort_key(raw: &str) -> NaiveDate {
    parse_date(raw).unwrap_or(NaiveDate::MIN)
}
