//! Callable functions of a deployed contract, read from its class.
//!
//! Sierra classes carry the ABI as a JSON string of
//! [`AbiEntry`](starknet::core::types::contract::AbiEntry) values, with
//! functions nested inside interfaces. Legacy (Cairo 0) classes carry an
//! optional array of [`LegacyContractAbiEntry`] values.

use std::fmt;

use starknet::core::types::contract::AbiEntry;
use starknet::core::types::{ContractClass, LegacyContractAbiEntry};

use crate::error::{Error, Result};

/// Function names a contract exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abi {
    functions: Vec<String>,
}

impl Abi {
    /// Extract the interface description from a contract class.
    ///
    /// Returns `Ok(None)` when the class has no ABI: a legacy class without
    /// one, or a Sierra class with an empty ABI string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a Sierra ABI string is not valid JSON.
    pub fn from_class(class: &ContractClass) -> Result<Option<Self>> {
        let mut functions = Vec::new();

        match class {
            ContractClass::Sierra(sierra) => {
                if sierra.abi.trim().is_empty() {
                    return Ok(None);
                }
                let entries: Vec<AbiEntry> = serde_json::from_str(&sierra.abi)
                    .map_err(|e| Error::Parse(format!("invalid Sierra ABI: {e}")))?;
                collect_sierra(&entries, &mut functions);
            }
            ContractClass::Legacy(legacy) => {
                let Some(entries) = &legacy.abi else {
                    return Ok(None);
                };
                for entry in entries {
                    if let LegacyContractAbiEntry::Function(function) = entry {
                        functions.push(function.name.clone());
                    }
                }
            }
        }

        Ok(Some(Self { functions }))
    }

    /// Build an ABI exposing the given function names and nothing else.
    pub fn with_functions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            functions: names.into_iter().map(Into::into).collect(),
        }
    }

    /// All function names, including those nested inside interfaces.
    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f == name)
    }

    /// Return the first candidate name this ABI exposes.
    pub fn find_entry_point<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates.iter().copied().find(|name| self.has_function(name))
    }

    /// Classify the contract from the functions it exposes.
    #[must_use]
    pub fn token_standard(&self) -> TokenStandard {
        let has_any = |names: &[&str]| names.iter().any(|n| self.has_function(n));

        if has_any(&["owner_of", "ownerOf"]) && has_any(&["get_approved", "getApproved"]) {
            return TokenStandard::Erc721;
        }
        if has_any(&["balance_of", "balanceOf"])
            && has_any(&["total_supply", "totalSupply"])
            && self.has_function("allowance")
        {
            return TokenStandard::Erc20;
        }
        TokenStandard::Unknown
    }
}

fn collect_sierra(entries: &[AbiEntry], out: &mut Vec<String>) {
    for entry in entries {
        match entry {
            AbiEntry::Function(function) => out.push(function.name.clone()),
            AbiEntry::Interface(interface) => collect_sierra(&interface.items, out),
            _ => {}
        }
    }
}

/// Token standard a contract implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStandard {
    Erc20,
    Erc721,
    Unknown,
}

impl fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStandard::Erc20 => write!(f, "ERC20"),
            TokenStandard::Erc721 => write!(f, "ERC721"),
            TokenStandard::Unknown => write!(f, "unknown"),
        }
    }
}
