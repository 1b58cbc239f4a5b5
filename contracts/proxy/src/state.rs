use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use cw_storage_plus::Item;
use polytone::Capability;

pub const CONTRACT_NAME: &str = "crates.io:polytone-proxy";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result slot for one message of the in-flight batch
#[cw_serde]
pub struct Slot {
    /// Whether the message was a wasm execute (its data arrives wrapped)
    pub wasm_execute: bool,
    /// Response data, filled by the reply
    pub data: Option<Binary>,
}

/// The voice that instantiated this proxy
pub const OWNER: Item<Capability> = Item::new("owner");

/// Slots of the in-flight batch, one per message
pub const COLLECTOR: Item<Vec<Slot>> = Item::new("collector");
