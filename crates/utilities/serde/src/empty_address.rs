//! Serde module for `Option<Address>` carried as a string that is empty when absent.
//!
//! `None` serializes to `""` rather than `null`, and `Some` to the EIP-55 checksummed form.

use alloy_primitives::Address;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serializer, de};

/// Serializes an optional [`Address`], writing `""` for `None`.
pub fn serialize<S>(value: &Option<Address>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(address) => serializer.serialize_str(&address.to_checksum(None)),
        None => serializer.serialize_str(""),
    }
}

/// Deserializes an optional [`Address`], reading `""` as `None`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(None);
    }
    Address::from_str(&raw).map(Some).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        to: Option<Address>,
    }

    #[test]
    fn test_none_is_empty_string() {
        let json = serde_json::to_string(&Wrapper { to: None }).unwrap();
        assert_eq!(json, r#"{"to":""}"#);
        let parsed: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to, None);
    }

    #[test]
    fn test_some_is_checksummed() {
        let to = address!("0xd8da6bf26964af9d7eed9e03e53415d37aa96045");
        let json = serde_json::to_string(&Wrapper { to: Some(to) }).unwrap();
        assert_eq!(json, r#"{"to":"0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"}"#);
        let parsed: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to, Some(to));
    }

    #[test]
    fn test_null_is_rejected() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"to":null}"#).is_err());
    }
}
