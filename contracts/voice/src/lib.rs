//! Polytone Voice - Receiver Side of a Polytone Channel
//!
//! The voice accepts packets from notes on other chains and executes them
//! through one proxy per (channel, remote sender).
//!
//! # Receive Flow
//! 1. Refuse packets on channels that are not OPEN (failure ack)
//! 2. Decode the packet; a malformed packet is acknowledged as a failure
//! 3. Dispatch `Rx` to itself as a gas-limited sub-message
//! 4. `Rx` resolves the sender's proxy, instantiating it on first use
//! 5. The proxy runs the batch; its results become the `Rx` response data
//! 6. The `Rx` reply turns success or failure into the acknowledgement
//!
//! Every packet gets exactly one acknowledgement. Errors inside `Rx`,
//! including running out of gas, revert everything `Rx` did and surface as a
//! failure acknowledgement rather than failing the receive transaction.

pub mod contract;
pub mod error;
pub mod hash;
pub mod ibc;
pub mod msg;
mod query;
mod rx;
pub mod state;

pub use crate::error::ContractError;
