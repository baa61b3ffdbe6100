//! Timestamp encoding
//!
//! Dates are stored as integer milliseconds since the Unix epoch. Reading them
//! back through the store yields plain numbers.

use serde_json::Value;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the epoch, negative before it. Saturates at the i64 bounds.
pub fn to_epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|millis| -millis)
            .unwrap_or(i64::MIN),
    }
}

pub fn from_epoch_millis(millis: i64) -> SystemTime {
    let offset = Duration::from_millis(millis.unsigned_abs());
    if millis >= 0 {
        UNIX_EPOCH + offset
    } else {
        UNIX_EPOCH - offset
    }
}

/// The JSON number a timestamp is stored as
pub fn timestamp_value(time: SystemTime) -> Value {
    Value::from(to_epoch_millis(time))
}

/// `#[serde(with = "epoch_millis")]` for `SystemTime` fields
pub mod epoch_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::SystemTime;

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(super::to_epoch_millis(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(super::from_epoch_millis)
    }
}
