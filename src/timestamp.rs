//! Conversion between wall-clock instants and the 60-bit `timestamp` field.
//!
//! The field counts 100-nanosecond intervals since 1582-10-15T00:00:00Z, the start of the
//! Gregorian calendar, as in RFC 4122.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Number of 100-nanosecond ticks between 1582-10-15 and the Unix epoch.
pub const EPOCH_OFFSET: u64 = 122_192_928_000_000_000;

/// Largest value the 60-bit `timestamp` field can hold.
pub const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

const TICKS_PER_SEC: u64 = 10_000_000;

/// Returns the `timestamp` field value of the current system time.
pub fn now() -> u64 {
    from_system_time(SystemTime::now())
}

/// Converts a wall-clock instant into a `timestamp` field value.
///
/// Instants that do not fit in the field are clamped to `0` or [`MAX_TIMESTAMP`].
pub fn from_system_time(t: SystemTime) -> u64 {
    let since_unix = match t.duration_since(UNIX_EPOCH) {
        Ok(d) => (d.as_nanos() / 100) as i128,
        Err(err) => -((err.duration().as_nanos() / 100) as i128),
    };
    (EPOCH_OFFSET as i128 + since_unix).clamp(0, MAX_TIMESTAMP as i128) as u64
}

/// Converts a `timestamp` field value back into a wall-clock instant, or returns `None` if the
/// platform cannot represent it.
pub fn to_system_time(timestamp: u64) -> Option<SystemTime> {
    let to_duration = |ticks: u64| {
        Duration::new(
            ticks / TICKS_PER_SEC,
            (ticks % TICKS_PER_SEC) as u32 * 100,
        )
    };
    if timestamp >= EPOCH_OFFSET {
        UNIX_EPOCH.checked_add(to_duration(timestamp - EPOCH_OFFSET))
    } else {
        UNIX_EPOCH.checked_sub(to_duration(EPOCH_OFFSET - timestamp))
    }
}
