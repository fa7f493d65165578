//! Decoding of view function return values.
//!
//! Move values arrive as JSON with a few encoding quirks:
//! - `u64` is a decimal string (`"42"`), though plain numbers are accepted
//! - `Option<T>` is an object holding a zero- or one-element `vec`
//! - `vector<u8>` is a `0x`-prefixed hex string

use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::error::{RegistryError, RegistryResult};
use crate::view::ViewFunction;

/// Decode the first return value of `function` as `T`.
pub fn decode_first<T: DeserializeOwned>(
    function: &ViewFunction,
    returns: Vec<Value>,
) -> RegistryResult<T> {
    let value = returns
        .into_iter()
        .next()
        .ok_or_else(|| RegistryError::MissingReturn(function.to_string()))?;

    serde_json::from_value(value).map_err(|e| RegistryError::Decode {
        function: function.to_string(),
        message: e.to_string(),
    })
}

/// Move `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveU64(pub u64);

impl From<MoveU64> for u64 {
    fn from(value: MoveU64) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for MoveU64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_move_u64(deserializer).map(MoveU64)
    }
}

/// Move `Option<T>`, encoded as `{"vec": []}` or `{"vec": [value]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveOption<T> {
    vec: Vec<T>,
}

impl<T> MoveOption<T> {
    /// Convert to a Rust option, rejecting vectors with more than one element.
    pub fn into_option(self, function: &ViewFunction) -> RegistryResult<Option<T>> {
        let len = self.vec.len();
        if len > 1 {
            return Err(RegistryError::Decode {
                function: function.to_string(),
                message: format!("option vector has {len} elements"),
            });
        }
        Ok(self.vec.into_iter().next())
    }
}

/// Deserialize a Move `u64`, accepting both String and Number.
pub fn deserialize_move_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct MoveU64Visitor;

    impl<'de> Visitor<'de> for MoveU64Visitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a u64 as a decimal string or number")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse::<u64>()
                .map_err(|e| E::custom(format!("invalid u64 {v:?}: {e}")))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(v).map_err(|_| E::custom(format!("negative u64 {v}")))
        }
    }

    deserializer.deserialize_any(MoveU64Visitor)
}

/// Deserialize a Move `vector<u8>` holding UTF-8 text.
///
/// Hex strings (`0x...`) are decoded; anything else is kept verbatim.
pub fn deserialize_move_bytes_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let Some(hex_digits) = raw.strip_prefix("0x") else {
        return Ok(raw);
    };
    match hex::decode(hex_digits) {
        Ok(bytes) => String::from_utf8(bytes)
            .map_err(|e| de::Error::custom(format!("bytes are not UTF-8: {e}"))),
        Err(_) => Ok(raw),
    }
}
