use chrono::NaiveDate;

/// Date format used for timeline labels (`2024-06-01`).
pub const TIMELINE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a timeline label into a calendar date.
///
/// Returns `None` for anything that is not a strict `YYYY-MM-DD` date.
pub fn parse_timeline_date(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label.trim(), TIMELINE_DATE_FORMAT).ok()
}

/// Returns the first pair of adjacent dates that go backwards in time.
pub fn first_out_of_order(dates: &[NaiveDate]) -> Option<(usize, usize)> {
    dates
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|idx| (idx, idx + 1))
}
