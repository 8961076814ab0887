//! Lenient parsing of the date strings found in feed metadata
//!
//! Feeds in the wild use RFC 822/2822 (`pubDate`), RFC 3339 (Atom) and a
//! long tail of hand-rolled variants. Every function here returns `None`
//! instead of an error: an unparseable date only means the row sorts last.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;

use super::models::RawEntry;

/// Date-time layouts without an offset, interpreted as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only layouts, interpreted as midnight UTC
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
];

/// Layouts carrying a numeric offset that RFC 3339 rejects (no colon, space separator)
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%a, %d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M:%S %z",
];

/// Parse a loosely formatted date string into a UTC timestamp
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    let rfc822 = normalize_zone_names(text);
    if let Ok(dt) = DateTime::parse_from_rfc2822(&clean_rfc822(&rfc822)) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&rfc822, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive = strip_weekday(text);
    let naive = naive.strip_suffix('Z').unwrap_or(naive).trim();

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(naive, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    tracing::debug!("Unrecognised date format: {:?}", input);
    None
}

/// Normalized date of an entry: `published` first, then `updated`
pub fn parse_when(entry: &RawEntry) -> Option<DateTime<Utc>> {
    [entry.published.as_deref(), entry.updated.as_deref()]
        .into_iter()
        .flatten()
        .find_map(parse_timestamp)
}

/// Canonical ISO-8601 rendering used in result rows
pub fn format_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Zone names chrono's RFC 2822 parser does not know, with their numeric offsets
const ZONE_OFFSETS: &[(&str, &str)] = &[
    (" UTC", " +0000"),
    (" Z", " +0000"),
    (" WET", " +0000"),
    (" BST", " +0100"),
    (" IST", " +0100"),
    (" WEST", " +0100"),
    (" CET", " +0100"),
    (" MET", " +0100"),
    (" CEST", " +0200"),
    (" MEST", " +0200"),
    (" EET", " +0200"),
    (" EEST", " +0300"),
];

fn normalize_zone_names(text: &str) -> String {
    for (zone, offset) in ZONE_OFFSETS {
        if let Some(rest) = text.strip_suffix(zone) {
            return format!("{}{}", rest, offset);
        }
    }
    text.to_string()
}

struct Rfc822Fixups {
    weekday: Regex,
    month: Regex,
    hour_24: Regex,
    short_hour: Regex,
}

fn rfc822_fixups() -> &'static Rfc822Fixups {
    static FIXUPS: OnceLock<Rfc822Fixups> = OnceLock::new();
    FIXUPS.get_or_init(|| Rfc822Fixups {
        weekday: Regex::new(r"(?i)^(sun|mon|tue|wed|thu|fri|sat)[a-z]*,?\s*")
            .expect("weekday pattern is a valid regex"),
        month: Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\b")
            .expect("month pattern is a valid regex"),
        hour_24: Regex::new(r" 24:").expect("hour pattern is a valid regex"),
        short_hour: Regex::new(r" (\d):").expect("hour pattern is a valid regex"),
    })
}

/// Bend common RFC 822 deviations into what chrono accepts: long or odd
/// weekday names ("Thurs,", "Monday,") are dropped, month names cut to three
/// letters, "24:" read as "00:" and single-digit hours zero-padded
fn clean_rfc822(text: &str) -> String {
    let fixups = rfc822_fixups();
    let text = fixups.weekday.replace(text, "");
    let text = fixups.month.replace_all(&text, "$1");
    let text = fixups.hour_24.replace_all(&text, " 00:");
    fixups.short_hour.replace_all(&text, " 0$1:").into_owned()
}

/// Drop a leading "Monday, " / "Mon " so the date-only layouts can match
fn strip_weekday(text: &str) -> &str {
    let Some((head, rest)) = text.split_once([',', ' ']) else {
        return text;
    };
    let is_weekday = head.len() >= 3
        && [
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
        ]
        .iter()
        .any(|day| day.starts_with(&head.to_ascii_lowercase()));

    if is_weekday {
        rest.trim_start_matches([',', ' '])
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_rfc822_dates() {
        assert_eq!(
            parse_timestamp("Mon, 15 Jan 2024 09:30:00 GMT"),
            Some(utc(2024, 1, 15, 9, 30, 0))
        );
        assert_eq!(
            parse_timestamp("Mon, 15 Jan 2024 09:30:00 +0100"),
            Some(utc(2024, 1, 15, 8, 30, 0))
        );
        assert_eq!(
            parse_timestamp("Mon, 15 Jan 2024 09:30:00 UTC"),
            Some(utc(2024, 1, 15, 9, 30, 0))
        );
    }

    #[test]
    fn test_rfc822_deviations() {
        assert_eq!(
            parse_timestamp("Thurs, 13 Jul 2023 07:38:00 GMT"),
            Some(utc(2023, 7, 13, 7, 38, 0))
        );
        assert_eq!(
            parse_timestamp("Monday, 15 January 2024 09:30:00 GMT"),
            Some(utc(2024, 1, 15, 9, 30, 0))
        );
        assert_eq!(
            parse_timestamp("Mon, 15 Jan 2024 9:30:00 GMT"),
            Some(utc(2024, 1, 15, 9, 30, 0))
        );
        assert_eq!(
            parse_timestamp("Mon, 15 Jan 2024 24:00:00 GMT"),
            Some(utc(2024, 1, 15, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp("Tue, 5 September 2023 14:00:00 +0000"),
            Some(utc(2023, 9, 5, 14, 0, 0))
        );
    }

    #[test]
    fn test_european_zone_names() {
        assert_eq!(
            parse_timestamp("Mon, 15 Jan 2024 09:30:00 CET"),
            Some(utc(2024, 1, 15, 8, 30, 0))
        );
        assert_eq!(
            parse_timestamp("Mon, 15 Jul 2024 09:30:00 CEST"),
            Some(utc(2024, 7, 15, 7, 30, 0))
        );
        assert_eq!(
            parse_timestamp("Mon, 15 Jul 2024 09:30:00 BST"),
            Some(utc(2024, 7, 15, 8, 30, 0))
        );
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(
            parse_timestamp("2024-01-15T09:30:00Z"),
            Some(utc(2024, 1, 15, 9, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2024-01-15T09:30:00+02:00"),
            Some(utc(2024, 1, 15, 7, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2024-01-15T09:30:00+0200"),
            Some(utc(2024, 1, 15, 7, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2024-01-15 09:30:00"),
            Some(utc(2024, 1, 15, 9, 30, 0))
        );
        assert_eq!(parse_timestamp("2024-01-15"), Some(utc(2024, 1, 15, 0, 0, 0)));
    }

    #[test]
    fn test_loose_dates() {
        assert_eq!(parse_timestamp("15/01/2024"), Some(utc(2024, 1, 15, 0, 0, 0)));
        assert_eq!(
            parse_timestamp("15 January 2024"),
            Some(utc(2024, 1, 15, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp("Monday, 15 January 2024"),
            Some(utc(2024, 1, 15, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp("January 15, 2024"),
            Some(utc(2024, 1, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("closing soon"), None);
        assert_eq!(parse_timestamp("2024-13-45"), None);
    }

    #[test]
    fn test_parse_when_prefers_published() {
        let entry = RawEntry {
            published: Some("2024-01-15".to_string()),
            updated: Some("2024-02-01".to_string()),
            ..Default::default()
        };
        assert_eq!(parse_when(&entry), Some(utc(2024, 1, 15, 0, 0, 0)));
    }

    #[test]
    fn test_parse_when_falls_back_to_updated() {
        let unparseable = RawEntry {
            published: Some("sometime soon".to_string()),
            updated: Some("2024-02-01".to_string()),
            ..Default::default()
        };
        assert_eq!(parse_when(&unparseable), Some(utc(2024, 2, 1, 0, 0, 0)));

        let missing = RawEntry {
            updated: Some("2024-02-01".to_string()),
            ..Default::default()
        };
        assert_eq!(parse_when(&missing), Some(utc(2024, 2, 1, 0, 0, 0)));

        assert_eq!(parse_when(&RawEntry::default()), None);
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(
            format_iso(&utc(2024, 1, 15, 0, 0, 0)),
            "2024-01-15T00:00:00+00:00"
        );
    }
}
