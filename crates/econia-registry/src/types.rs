//! Registry record types.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::decode::{deserialize_move_bytes_string, deserialize_move_u64};
use crate::error::RegistryError;

/// Aptos account address (32 bytes).
///
/// Parses `0x`-prefixed or bare hex, left-padding short forms such as
/// `0x1`. Displays as `0x` followed by 64 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; 32]);

impl AccountAddress {
    pub const LENGTH: usize = 32;

    /// Address from its raw 32 bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for AccountAddress {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() || digits.len() > Self::LENGTH * 2 {
            return Err(RegistryError::InvalidAddress(s.to_string()));
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| RegistryError::InvalidAddress(format!("{s}: {e}")))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Move type descriptor (`aptos_std::type_info::TypeInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Address of the package declaring the type.
    pub package_address: AccountAddress,
    /// Module declaring the type (e.g., "aptos_coin").
    #[serde(deserialize_with = "deserialize_move_bytes_string")]
    pub module_name: String,
    /// Struct name (e.g., "AptosCoin").
    #[serde(deserialize_with = "deserialize_move_bytes_string")]
    pub type_name: String,
}

impl TypeInfo {
    /// Fully qualified type tag, usable as a view function type argument.
    pub fn type_tag(&self) -> String {
        format!(
            "{}::{}::{}",
            self.package_address, self.module_name, self.type_name
        )
    }
}

/// Number of registered markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketCounts {
    #[serde(deserialize_with = "deserialize_move_u64")]
    pub n_markets: u64,
    #[serde(deserialize_with = "deserialize_move_u64")]
    pub n_recognized_markets: u64,
}

/// Registered market parameters.
///
/// Sizes are in subunits: `lot_size` of base, `tick_size` of quote;
/// `min_size` is in lots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInfo {
    /// Base asset name for generic markets, empty for coin markets.
    pub base_name_generic: String,
    pub base_type: TypeInfo,
    pub is_recognized: bool,
    #[serde(deserialize_with = "deserialize_move_u64")]
    pub lot_size: u64,
    #[serde(deserialize_with = "deserialize_move_u64")]
    pub market_id: u64,
    #[serde(deserialize_with = "deserialize_move_u64")]
    pub min_size: u64,
    pub quote_type: TypeInfo,
    #[serde(deserialize_with = "deserialize_move_u64")]
    pub tick_size: u64,
    #[serde(deserialize_with = "deserialize_move_u64")]
    pub underwriter_id: u64,
}

impl MarketInfo {
    /// Whether the base asset is a generic (non-coin) asset.
    pub fn is_generic(&self) -> bool {
        !self.base_name_generic.is_empty()
    }
}
