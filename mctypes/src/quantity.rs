//! Hex quantity codec.
//!
//! The node encodes every integer as a `0x`-prefixed, lowercase hex
//! string without leading zeros (`"0x0"`, `"0x1f"`).  Helpers here
//! convert between those strings and `u64` / [`U256`], and the nested
//! modules plug the same rules into serde via `#[serde(with = ...)]`.
use alloy::primitives::U256;

/// Why a hex quantity could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("quantity `{0}` is missing the 0x prefix")]
    MissingPrefix(String),

    #[error("quantity `{0}` has no digits")]
    Empty(String),

    #[error("quantity `{0}` contains non-hex characters")]
    InvalidDigit(String),

    #[error("quantity `{value}` does not fit in {bits} bits")]
    Overflow { value: String, bits: u32 },
}

/// Encode an integer as a `0x`-prefixed lowercase hex string.
pub fn int_to_hex(n: u64) -> String {
    format!("0x{n:x}")
}

/// Encode a 256-bit integer as a `0x`-prefixed lowercase hex string.
pub fn big_to_hex(n: U256) -> String {
    format!("0x{n:x}")
}

/// Decode a `0x`-prefixed hex string into a `u64`.
pub fn parse_int(value: &str) -> Result<u64, QuantityError> {
    let digits = hex_digits(value)?;
    u64::from_str_radix(digits, 16).map_err(|_| QuantityError::Overflow {
        value: value.to_string(),
        bits: u64::BITS,
    })
}

/// Decode a `0x`-prefixed hex string into a [`U256`].  Values wider
/// than 256 bits are rejected rather than truncated.
pub fn parse_big_int(value: &str) -> Result<U256, QuantityError> {
    let digits = hex_digits(value)?;
    U256::from_str_radix(digits, 16).map_err(|_| QuantityError::Overflow {
        value: value.to_string(),
        bits: 256,
    })
}

fn hex_digits(value: &str) -> Result<&str, QuantityError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| QuantityError::MissingPrefix(value.to_string()))?;

    if digits.is_empty() {
        return Err(QuantityError::Empty(value.to_string()));
    }
    // from_str_radix tolerates a leading '+' and ruint skips '_'
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QuantityError::InvalidDigit(value.to_string()));
    }
    Ok(digits)
}

/// `#[serde(with = "quantity::serde_u64")]`
pub mod serde_u64 {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::int_to_hex(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_int(&raw).map_err(D::Error::custom)
    }
}

/// `#[serde(with = "quantity::serde_opt_u64")]`, `null` maps to `None`.
pub mod serde_opt_u64 {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(n) => serializer.serialize_str(&super::int_to_hex(*n)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_int(&raw))
            .transpose()
            .map_err(D::Error::custom)
    }
}

/// `#[serde(with = "quantity::serde_u256")]`
pub mod serde_u256 {
    use alloy::primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::big_to_hex(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_big_int(&raw).map_err(D::Error::custom)
    }
}

/// `#[serde(with = "quantity::serde_opt_u256")]`, `null` maps to `None`.
pub mod serde_opt_u256 {
    use alloy::primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(n) => serializer.serialize_str(&super::big_to_hex(*n)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_big_int(&raw))
            .transpose()
            .map_err(D::Error::custom)
    }
}
