//! Lenient handling of item sequence numbers.
//!
//! Sequence numbers arrive as text from the `meta` block and as loosely
//! typed JSON from callers. Anything that is not a non-negative integer
//! becomes [`DEFAULT_SEQ`] instead of failing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Sequence used when none is given or it is not numeric.
pub const DEFAULT_SEQ: u32 = 1;

/// Coerces the textual form of a sequence number.
#[must_use]
pub fn coerce(raw: Option<&str>) -> u32 {
    raw.and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_SEQ)
}

fn coerce_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Deserializes a sequence number from a number, a numeric string, or
/// anything else (which yields [`DEFAULT_SEQ`]).
///
/// # Errors
///
/// Returns an error only if the input is not valid for `serde_json::Value`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_value(&value).unwrap_or(DEFAULT_SEQ))
}

/// Like [`deserialize`], but keeps an explicit `null` as `None`.
///
/// # Errors
///
/// Returns an error only if the input is not valid for `serde_json::Value`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_value(&value).unwrap_or(DEFAULT_SEQ)))
}

/// Default for serde `default = "..."` attributes.
#[must_use]
pub const fn default_seq() -> u32 {
    DEFAULT_SEQ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Item {
        #[serde(default = "default_seq", deserialize_with = "deserialize")]
        seq: u32,
    }

    fn seq_of(json: &str) -> u32 {
        serde_json::from_str::<Item>(json).expect("valid json").seq
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce(Some("4")), 4);
        assert_eq!(coerce(Some(" 7 ")), 7);
        assert_eq!(coerce(Some("abc")), DEFAULT_SEQ);
        assert_eq!(coerce(None), DEFAULT_SEQ);
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_strings() {
        assert_eq!(seq_of(r#"{"seq": 3}"#), 3);
        assert_eq!(seq_of(r#"{"seq": "5"}"#), 5);
    }

    #[test]
    fn test_deserialize_coerces_invalid_to_default() {
        assert_eq!(seq_of(r#"{"seq": "first"}"#), DEFAULT_SEQ);
        assert_eq!(seq_of(r#"{"seq": -2}"#), DEFAULT_SEQ);
        assert_eq!(seq_of(r#"{"seq": null}"#), DEFAULT_SEQ);
        assert_eq!(seq_of("{}"), DEFAULT_SEQ);
    }
}
