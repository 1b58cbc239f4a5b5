use cosmwasm_std::Binary;
use cw_storage_plus::{Item, Map};
use polytone::CallbackMessage;

pub const CONTRACT_NAME: &str = "crates.io:polytone-tester";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of callbacks received so far
pub const CALLBACK_COUNT: Item<u64> = Item::new("callback_count");

/// arrival index => callback
pub const CALLBACK_HISTORY: Map<u64, CallbackMessage> = Map::new("callback_history");

pub const HELLO_COUNT: Item<u64> = Item::new("hello_count");

/// arrival index => data passed to `Hello`
pub const HELLO_HISTORY: Map<u64, Binary> = Map::new("hello_history");

/// Scratch slot written in a loop by `RunOutOfGas`
pub const GAS_BURNER: Item<u64> = Item::new("gas_burner");
