//! Identifiers built on Starknet field elements.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use starknet::core::types::Felt;

use super::amount::felt_to_u256;
use crate::error::{Error, Result};

/// Parse a felt from `0x`-prefixed hex or a plain decimal string.
///
/// Only ASCII digits of the chosen radix are accepted: no sign, no digit
/// separators, no surrounding text other than whitespace.
///
/// # Errors
///
/// Returns [`Error::Parse`] on malformed input or a value that is not below
/// the field prime.
pub fn parse_felt(s: &str) -> Result<Felt> {
    let trimmed = s.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::Parse(format!("invalid felt '{s}'")));
    }

    let value = U256::from_str_radix(digits, u64::from(radix))
        .map_err(|e| Error::Parse(format!("invalid felt '{s}': {e}")))?;
    let felt = Felt::from_bytes_be(&value.to_be_bytes::<32>());

    // `from_bytes_be` reduces modulo the prime, so a changed value means it
    // was out of range.
    if felt_to_u256(felt) != value {
        return Err(Error::Parse(format!("felt '{s}' exceeds the Starknet field prime")));
    }

    Ok(felt)
}

/// Address of a deployed contract or account.
///
/// Equality is numeric, so `0x02` and `0x2` name the same contract. The zero
/// address is what token contracts report when nobody is approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContractAddress(Felt);

impl ContractAddress {
    pub const ZERO: Self = Self(Felt::ZERO);

    #[must_use]
    pub fn felt(&self) -> Felt {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Felt::ZERO
    }
}

impl From<Felt> for ContractAddress {
    fn from(felt: Felt) -> Self {
        Self(felt)
    }
}

impl From<u64> for ContractAddress {
    fn from(value: u64) -> Self {
        Self(Felt::from(value))
    }
}

impl FromStr for ContractAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_felt(s).map(Self)
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Serialize for ContractAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContractAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Hash of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionHash(Felt);

impl TransactionHash {
    pub fn new(felt: Felt) -> Self {
        Self(felt)
    }
}

impl FromStr for TransactionHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_felt(s).map(Self)
    }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Serialize for TransactionHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransactionHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
