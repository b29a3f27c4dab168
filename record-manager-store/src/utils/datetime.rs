//! 日期时间序列化/反序列化工具
//!
//! 提供自定义 Serde 序列化/反序列化支持：
//! - 序列化: `DateTime`<Utc> -> RFC3339 字符串
//! - 反序列化: RFC3339 字符串、Postgres 文本格式、无时区时间（按 UTC）或 Unix 时间戳 -> `DateTime`<Utc>

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 序列化 `DateTime`<Utc> 为 RFC3339 字符串
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// 反序列化：支持多种时间戳格式
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        String(String),
        I64(i64),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::String(s) => parse_timestamp(&s)
            .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}"))),
        Timestamp::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// 解析文本时间戳
///
/// 依次尝试：RFC3339、Postgres `timestamptz` 文本（`2024-01-02 00:00:00+00`）、
/// 无时区的 `timestamp`（视为 UTC）
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // 大于 10^11 视为毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAN_2: i64 = 1_704_153_600;

    #[test]
    fn parses_rfc3339_variants() {
        for s in [
            "2024-01-02T00:00:00Z",
            "2024-01-02T00:00:00+00:00",
            "2024-01-02T08:00:00+08:00",
        ] {
            assert_eq!(parse_timestamp(s).map(|d| d.timestamp()), Some(JAN_2), "{s}");
        }
    }

    #[test]
    fn parses_postgres_text_format() {
        assert_eq!(
            parse_timestamp("2024-01-02 00:00:00.5+00").map(|d| d.timestamp()),
            Some(JAN_2)
        );
    }

    #[test]
    fn naive_timestamp_is_utc() {
        assert_eq!(
            parse_timestamp("2024-01-02T00:00:00.000001").map(|d| d.timestamp()),
            Some(JAN_2)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn unix_seconds_and_millis() {
        assert_eq!(parse_unix_timestamp(JAN_2).map(|d| d.timestamp()), Some(JAN_2));
        assert_eq!(
            parse_unix_timestamp(JAN_2 * 1000).map(|d| d.timestamp()),
            Some(JAN_2)
        );
    }
}
