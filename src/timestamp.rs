//! Timestamp rendering for log entries and `Date` values.
use chrono::{DateTime, Local, Utc};
/// Calendar-field pattern: zero-padded fields, 3-letter weekday and month.
const STAMP_FORMAT: &str = "%Y-%b-%d %a %H:%M:%S%.3f";
/// Formats an instant as `YYYY-Mon-DD Dow HH:MM:SS.mmm Local|UTC`.
///
/// Every calendar field follows the clock named by `local`.
#[must_use]
pub fn time_stamp(instant: DateTime<Utc>, local: bool) -> String {
  if local {
    format!("{} Local", instant.with_timezone(&Local).format(STAMP_FORMAT))
  } else {
    format!("{} UTC", instant.format(STAMP_FORMAT))
  }
}
