// ABOUTME: Duration codecs for episode lengths, soundbites, time splits, and chapter marks.
// ABOUTME: Fractional seconds, rounded integer seconds, and [HH:]MM:SS[.mmm] timestamps.

use std::time::Duration;

use crate::error::EncodeError;
use crate::scalars::trim_decimal;

/// Renders a duration as seconds with trailing zeros trimmed.
/// A value with no fractional part still gets a `.0` suffix: 73s becomes `"73.0"`.
pub fn encode_fractional_seconds(d: Duration) -> String {
    let mut s = trim_decimal(d.as_secs_f64());
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Renders a duration as whole seconds, rounding half away from zero.
pub fn encode_integer_seconds(d: Duration) -> String {
    let secs = d.as_secs_f64().round() as u64;
    secs.to_string()
}

/// Renders a Podlove chapter start time.
///
/// Minutes and seconds are always two digits. The hours segment only appears
/// when non-zero and the milliseconds segment only when non-zero:
/// 3m7s is `"03:07"`, 1h3m7.5s is `"01:03:07.500"`.
pub fn encode_chapter_timestamp(d: Duration) -> String {
    let total_ms = d.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;

    let mut s = format!("{:02}:{:02}", minutes, seconds);
    if hours > 0 {
        s = format!("{:02}:{}", hours, s);
    }
    if millis > 0 {
        s = format!("{}.{:03}", s, millis);
    }
    s
}

/// Parses a fractional-seconds token such as `"73.0"` or `"42.25"`.
pub fn parse_fractional_seconds(s: &str) -> Result<Duration, EncodeError> {
    let s = s.trim();
    let secs: f64 = s
        .parse()
        .map_err(|_| EncodeError::parse(format!("not a number of seconds: {:?}", s)))?;
    Duration::try_from_secs_f64(secs).map_err(|e| EncodeError::parse(e.to_string()))
}

/// Parses a whole-seconds token such as `"600"`.
pub fn parse_integer_seconds(s: &str) -> Result<Duration, EncodeError> {
    let s = s.trim();
    s.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| EncodeError::parse(format!("not a whole number of seconds: {:?}", s)))
}

/// Parses a chapter timestamp in `[HH:]MM:SS[.mmm]` form.
pub fn parse_chapter_timestamp(s: &str) -> Result<Duration, EncodeError> {
    let s = s.trim();
    let bad = || EncodeError::parse(format!("not a chapter timestamp: {:?}", s));

    let (clock, millis) = match s.split_once('.') {
        Some((clock, frac)) => {
            if frac.is_empty() || frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(bad());
            }
            // ".5" means 500ms, not 5ms.
            let padded = format!("{:0<3}", frac);
            (clock, padded.parse::<u64>().map_err(|_| bad())?)
        }
        None => (s, 0),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.len() {
        2 => (0, parts[0], parts[1]),
        3 => (parts[0].parse::<u64>().map_err(|_| bad())?, parts[1], parts[2]),
        _ => return Err(bad()),
    };
    let minutes: u64 = minutes.parse().map_err(|_| bad())?;
    let seconds: u64 = seconds.parse().map_err(|_| bad())?;
    if minutes >= 60 || seconds >= 60 {
        return Err(bad());
    }

    let total_ms = ((hours * 60 + minutes) * 60 + seconds) * 1_000 + millis;
    Ok(Duration::from_millis(total_ms))
}

/// Serde adapter storing a `Duration` as fractional seconds.
pub mod serde_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter storing an `Option<Duration>` as optional fractional seconds.
pub mod serde_option_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => serializer.serialize_some(&d.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<f64>::deserialize(deserializer)?
            .map(|secs| Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom))
            .transpose()
    }
}
