//! Serde module for [`U256`] quantities carried as decimal strings.
//!
//! Serialization always emits a base-10 string. Deserialization is lenient and accepts:
//! - a base-10 string (`"1000000000000000000000"`),
//! - a `0x`-prefixed hex string (`"0x3635c9adc5dea00000"`),
//! - a JSON integer up to `u64::MAX`.
//!
//! Floating point numbers and negative integers are rejected. JSON parsers hand integers above
//! `u64::MAX` over as floats, so those are rejected too and must be sent as strings.
//!
//! ```
//! use alloy_primitives::U256;
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Fee {
//!     #[serde(with = "blockpost_serde::quantity")]
//!     amount: U256,
//! }
//! ```

use alloy_primitives::U256;
use core::{fmt, str::FromStr};
use serde::{
    Deserializer, Serializer,
    de::{self, Visitor},
};

/// Serializes a [`U256`] as a base-10 string.
pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Deserializes a [`U256`] from a decimal string, a hex string or an unsigned integer.
pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(QuantityVisitor)
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = U256;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an unsigned integer, a decimal string or a 0x-prefixed hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(U256::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(U256::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(U256::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::invalid_type(de::Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Err(E::invalid_length(0, &self));
        }
        U256::from_str(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
