//! Date parsing for content `date` fields

use chrono::{NaiveDate, NaiveTime};

/// Parse a human-readable date like "January 2, 2011".
///
/// Returns `None` when no supported format matches; feed items without a
/// parseable date simply go out without one.
pub fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Try various formats
    let formats = [
        "%B %d, %Y", // January 2, 2011
        "%B %d %Y",  // January 2 2011
        "%b %d, %Y", // Jan 2, 2011
        "%b %d %Y",  // Jan 2 2011
        "%d %B %Y",  // 2 January 2011
        "%d %b %Y",  // 2 Jan 2011
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
    ];

    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}

/// Midnight of the given date as an ISO 8601 timestamp, the shape feed
/// readers expect in `<updated>` elements.
pub fn feed_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
