use cosmwasm_std::Binary;
use cw_storage_plus::{Item, Map};
use polytone::{CallbackMessage, Capability};

pub const CONTRACT_NAME: &str = "crates.io:polytone-listener";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The note allowed to deliver callbacks
pub const NOTE: Item<Capability> = Item::new("note");

/// Key: (initiator, initiator_msg), Value: latest callback for that request
pub const RESULTS: Map<(&str, &[u8]), CallbackMessage> = Map::new("results");

pub fn result_key<'a>(initiator: &'a str, initiator_msg: &'a Binary) -> (&'a str, &'a [u8]) {
    (initiator, initiator_msg.as_slice())
}
