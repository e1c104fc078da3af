//! Lenient deserialization for wire integers.
//!
//! Metadata service payloads render 64-bit integers either as JSON
//! numbers or as quoted decimal strings, depending on which client wrote
//! them. The helper here accepts both forms (plus `null`), so a record
//! field decodes the same payload regardless of the producer.

use serde::{Deserialize, Deserializer};

/// Wire shapes accepted for an optional 64-bit integer field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawI64 {
    Number(i64),
    Text(String),
}

/// Deserializes an `Option<i64>` from a JSON number, a quoted decimal
/// string, or `null`.
///
/// Quoted forms must be exact decimal `i64` renderings; fractional
/// numbers, non-numeric text, and out-of-range magnitudes are rejected.
/// Pair with `#[serde(default)]` so an omitted key also decodes to
/// `None`.
pub(crate) fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawI64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawI64::Number(n)) => Ok(Some(n)),
        Some(RawI64::Text(text)) => text.parse::<i64>().map(Some).map_err(|_| {
            serde::de::Error::custom(format!("invalid 64-bit integer literal: {text:?}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_i64")]
        value: Option<i64>,
    }

    fn decode(payload: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(payload)
    }

    #[test]
    fn accepts_unquoted_number() {
        assert_eq!(decode(r#"{"value":42}"#).unwrap().value, Some(42));
        assert_eq!(decode(r#"{"value":-7}"#).unwrap().value, Some(-7));
    }

    #[test]
    fn accepts_quoted_number() {
        assert_eq!(decode(r#"{"value":"42"}"#).unwrap().value, Some(42));
        assert_eq!(decode(r#"{"value":"-7"}"#).unwrap().value, Some(-7));
    }

    #[test]
    fn accepts_full_i64_range_in_both_forms() {
        for extreme in [i64::MIN, i64::MAX] {
            assert_eq!(
                decode(&format!(r#"{{"value":{extreme}}}"#)).unwrap().value,
                Some(extreme)
            );
            assert_eq!(
                decode(&format!(r#"{{"value":"{extreme}"}}"#)).unwrap().value,
                Some(extreme)
            );
        }
    }

    #[test]
    fn null_and_missing_both_decode_to_none() {
        assert_eq!(decode(r#"{"value":null}"#).unwrap().value, None);
        assert_eq!(decode(r#"{}"#).unwrap().value, None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(decode(r#"{"value":"forty-two"}"#).is_err());
        assert!(decode(r#"{"value":""}"#).is_err());
        assert!(decode(r#"{"value":" 42"}"#).is_err());
    }

    #[test]
    fn rejects_fractional_and_boolean_values() {
        assert!(decode(r#"{"value":42.5}"#).is_err());
        assert!(decode(r#"{"value":true}"#).is_err());
    }

    #[test]
    fn rejects_out_of_range_magnitudes() {
        assert!(decode(r#"{"value":9223372036854775808}"#).is_err());
        assert!(decode(r#"{"value":"9223372036854775808"}"#).is_err());
    }
}
