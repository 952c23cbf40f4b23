// ABOUTME: Date codecs for RSS publish dates and Podcasting 2.0 live item timestamps.
// ABOUTME: Writes zero-padded RFC 2822 GMT dates and RFC 3339 UTC instants, with lenient readers.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::EncodeError;

/// Layout of `pubDate`, `lastBuildDate` and `podcast:trailer[pubdate]`.
/// The day of month is always two digits.
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Renders a publish date: `Tue, 31 Oct 2023 11:00:00 GMT`.
pub fn encode_pub_date(t: &DateTime<Utc>) -> String {
    t.format(PUB_DATE_FORMAT).to_string()
}

/// Renders an instant as RFC 3339 in UTC with a `Z` suffix.
/// Sub-second precision is only written when present.
pub fn encode_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses a publish date written by [`encode_pub_date`], or any RFC 2822 date,
/// including the older single-digit day form `Mon, 2 Jan 2006 15:04:05 GMT`.
pub fn parse_pub_date(s: &str) -> Result<DateTime<Utc>, EncodeError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(EncodeError::parse("empty date"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Some feeds say "UTC" where RFC 2822 only knows "GMT".
    if let Some(base) = s.strip_suffix("UTC") {
        let base = base.trim_end();
        for fmt in ["%a, %d %b %Y %H:%M:%S", "%a, %e %b %Y %H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(base, fmt) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }
    }

    Err(EncodeError::parse(format!("not an RFC 2822 date: {:?}", s)))
}

/// Parses an RFC 3339 instant, normalising it to UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, EncodeError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EncodeError::parse(format!("not an RFC 3339 timestamp: {}", e)))
}
