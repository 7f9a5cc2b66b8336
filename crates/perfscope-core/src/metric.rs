//! Completed timing record.
//!
//! JSON shape:
//! ```json
//! { "name": "load", "duration_ms": 250.0, "timestamp_ms": 1760000000000 }
//! ```
//! `timestamp_ms` is Unix epoch milliseconds of the stop call.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// One completed timing. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub duration_ms: f64,
    #[serde(rename = "timestamp_ms", with = "unix_millis")]
    pub timestamp: SystemTime,
}

impl Metric {
    pub fn new(name: impl Into<String>, elapsed: Duration, timestamp: SystemTime) -> Self {
        Self {
            name: name.into(),
            duration_ms: elapsed.as_secs_f64() * 1000.0,
            timestamp,
        }
    }

    /// Duration as a `Duration`. Saturates at `Duration::MAX`.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration_ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
    }
}

mod unix_millis {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &SystemTime, s: S) -> Result<S::Ok, S::Error> {
        let since = t
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ser::Error::custom(format!("timestamp before unix epoch: {e}")))?;
        let ms = u64::try_from(since.as_millis())
            .map_err(|_| ser::Error::custom("timestamp out of range"))?;
        s.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<SystemTime, D::Error> {
        let ms = u64::deserialize(d)?;
        UNIX_EPOCH
            .checked_add(Duration::from_millis(ms))
            .ok_or_else(|| de::Error::custom("timestamp out of range"))
    }
}
