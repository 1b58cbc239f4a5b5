//! State definitions for the Polytone note.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Configuration
// ============================================================================

/// The only connection and remote port this note will handshake with.
#[cw_serde]
pub struct Pair {
    pub connection_id: String,
    pub remote_port: String,
}

impl Pair {
    pub fn describe(&self) -> String {
        format!("{}/{}", self.connection_id, self.remote_port)
    }
}

#[cw_serde]
pub struct Config {
    /// Max gas of a block on this chain
    pub block_max_gas: u64,
    /// If set, only this address may submit, optionally on behalf of others
    pub controller: Option<Addr>,
}

impl Config {
    /// Gas a callback receiver may use, leaving room to finish resolution.
    pub fn callback_gas_limit(&self) -> u64 {
        self.block_max_gas.saturating_sub(CALLBACK_GAS_RESERVE)
    }
}

// ============================================================================
// Requests
// ============================================================================

#[cw_serde]
#[derive(Copy)]
pub enum RequestKind {
    Execute,
    Query,
}

#[cw_serde]
pub struct PendingCallback {
    pub receiver: Addr,
    /// Opaque token echoed back as `initiator_msg`
    pub msg: Binary,
}

/// A sent request waiting for its ack or timeout.
#[cw_serde]
pub struct PendingRequest {
    pub initiator: Addr,
    pub kind: RequestKind,
    pub operation_count: u64,
    pub timeout_seconds: u64,
    pub callback: Option<PendingCallback>,
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:polytone-note";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gas kept back from callback delivery
pub const CALLBACK_GAS_RESERVE: u64 = 101_000;

pub const REPLY_CALLBACK: u64 = 0;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Set at instantiation, or by the first completed handshake
pub const PAIR: Item<Pair> = Item::new("pair");

/// Local id of the OPEN channel requests are sent on
pub const ACTIVE_CHANNEL: Item<String> = Item::new("active_channel");

/// Key: channel id, Value: last sequence assigned on that channel
pub const SEQUENCES: Map<&str, u64> = Map::new("sequences");

/// Key: (channel id, sequence), Value: request awaiting resolution
pub const PENDING: Map<(&str, u64), PendingRequest> = Map::new("pending");
