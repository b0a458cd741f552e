//! Builders for classes, selectors and settings used across tests.
//!
//! Classes are shaped like `starknet_getClassAt` responses: Sierra classes
//! carry their ABI as a JSON string, legacy classes as an entry array.

use serde_json::{json, Value};
use starknet::core::types::{
    CompressedLegacyContractClass, ContractClass, EntryPointsByType, Felt, FlattenedSierraClass,
    LegacyContractAbiEntry, LegacyEntryPointsByType,
};
use starknet::core::utils::get_selector_from_name;

use crate::application::approval::ApprovalSettings;
use crate::domain::ContractAddress;

/// Spender configured by [`settings`].
pub const SPENDER: u64 = 0x2;

/// A Sierra class with the given ABI.
///
/// A JSON string is used verbatim as the ABI; anything else is encoded.
pub fn sierra_class(abi: Value) -> ContractClass {
    let abi = match abi {
        Value::String(raw) => raw,
        other => other.to_string(),
    };
    ContractClass::Sierra(FlattenedSierraClass {
        sierra_program: Vec::new(),
        contract_class_version: "0.1.0".to_string(),
        entry_points_by_type: EntryPointsByType {
            constructor: Vec::new(),
            external: Vec::new(),
            l1_handler: Vec::new(),
        },
        abi,
    })
}

/// A legacy (Cairo 0) class declaring the given functions.
pub fn legacy_class(functions: &[&str]) -> ContractClass {
    let entries: Vec<Value> = functions
        .iter()
        .map(|name| json!({"type": "function", "name": name, "inputs": [], "outputs": []}))
        .collect();
    let abi: Vec<LegacyContractAbiEntry> = serde_json::from_value(Value::Array(entries))
        .unwrap_or_else(|e| panic!("legacy ABI fixture is valid: {e}"));
    legacy(Some(abi))
}

fn legacy(abi: Option<Vec<LegacyContractAbiEntry>>) -> ContractClass {
    ContractClass::Legacy(CompressedLegacyContractClass {
        program: Vec::new(),
        entry_points_by_type: LegacyEntryPointsByType {
            constructor: Vec::new(),
            external: Vec::new(),
            l1_handler: Vec::new(),
        },
        abi,
    })
}

fn sierra_function(name: &str) -> Value {
    json!({
        "type": "function",
        "name": name,
        "inputs": [],
        "outputs": [],
        "state_mutability": "view"
    })
}

/// A Sierra class whose functions sit behind an `impl` and `interface` pair.
fn sierra_interface_class(interface: &str, functions: &[&str]) -> ContractClass {
    let items: Vec<Value> = functions.iter().copied().map(sierra_function).collect();
    sierra_class(json!([
        {"type": "impl", "name": format!("{interface}Impl"), "interface_name": interface},
        {"type": "interface", "name": interface, "items": items}
    ]))
}

/// A Cairo 1 ERC20 class.
pub fn erc20_class() -> ContractClass {
    sierra_interface_class(
        "IERC20",
        &[
            "total_supply",
            "balance_of",
            "allowance",
            "transfer",
            "transfer_from",
            "approve",
        ],
    )
}

/// A Cairo 1 ERC721 class.
pub fn erc721_class() -> ContractClass {
    sierra_interface_class(
        "IERC721",
        &[
            "balance_of",
            "owner_of",
            "get_approved",
            "is_approved_for_all",
            "approve",
            "set_approval_for_all",
            "transfer_from",
        ],
    )
}

/// A legacy class whose interface description is missing.
pub fn class_without_abi() -> ContractClass {
    legacy(None)
}

/// Selector a provider receives for `name`.
pub fn selector(name: &str) -> Felt {
    get_selector_from_name(name).unwrap_or_else(|e| panic!("valid entry point name: {e}"))
}

/// Default settings: chain `SN_SEPOLIA`, spender [`SPENDER`].
pub fn settings() -> ApprovalSettings {
    ApprovalSettings::new("SN_SEPOLIA", ContractAddress::from(SPENDER))
        .unwrap_or_else(|e| panic!("test settings are valid: {e}"))
}
