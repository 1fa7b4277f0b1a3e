use jiff::{Timestamp, tz};

/// Format a timestamp as a short date in the user's timezone, for list rows
/// and profile cards.
pub fn format_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%d %b %Y")
        .to_string()
}
