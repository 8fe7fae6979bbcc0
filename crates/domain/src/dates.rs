use chrono::NaiveDate;

/// Builds a calendar date for seed data; falls back to the epoch date when
/// the components are out of range.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
