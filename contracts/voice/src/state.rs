//! State definitions for the Polytone voice.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use polytone::Msg;

// ============================================================================
// Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// Code id used for every proxy this voice creates
    pub proxy_code_id: u64,
    /// Max gas of a block on this chain; fixed at instantiation
    pub block_max_gas: u64,
}

impl Config {
    /// Gas available to a whole `Rx` (proxy creation and execution),
    /// leaving room to write the acknowledgement.
    pub fn execution_gas_limit(&self) -> u64 {
        self.block_max_gas.saturating_sub(ACK_GAS_NEEDED)
    }
}

/// Where a proxy's remote sender lives.
#[cw_serde]
pub struct SenderInfo {
    /// Local channel the sender's packets arrive on
    pub channel_id: String,
    /// Address of the sender on the remote chain
    pub remote_sender: String,
}

/// Work left for the instantiate reply when a proxy has to be created first.
#[cw_serde]
pub struct PendingDispatch {
    pub channel_id: String,
    pub sender: String,
    pub msg: Msg,
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:polytone-voice";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gas reserved for writing the acknowledgement after `Rx` returns
pub const ACK_GAS_NEEDED: u64 = 101_000;

pub const REPLY_ACK: u64 = 0;
pub const REPLY_INIT_PROXY: u64 = 1;
pub const REPLY_FORWARD_DATA: u64 = 2;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: (local channel id, remote sender), Value: proxy address
pub const PROXIES: Map<(&str, &str), Addr> = Map::new("proxies");

/// Key: proxy address, Value: the sender it acts for
pub const SENDERS: Map<&Addr, SenderInfo> = Map::new("senders");

/// Set by `Rx` while a proxy is being instantiated, cleared by the reply
pub const PENDING_DISPATCH: Item<PendingDispatch> = Item::new("pending_dispatch");

/// Sequence of the packet being received, read by the ack reply
pub const ACK_SEQUENCE: Item<u64> = Item::new("ack_sequence");
