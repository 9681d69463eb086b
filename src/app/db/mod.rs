pub mod boards;
pub mod organizations;
pub mod sessions;
pub mod users;

use time::OffsetDateTime;

/// Current instant as milliseconds since the Unix epoch. All row timestamps use this unit.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
