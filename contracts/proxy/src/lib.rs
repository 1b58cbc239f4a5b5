//! Polytone Proxy - Execution Sandbox for a Remote Account
//!
//! A voice creates one proxy per (channel, remote sender) and is the only
//! address allowed to drive it afterwards.
//!
//! # Execute
//! Messages run in order as sub-messages of a single call. If any of them
//! fails the whole call fails and every effect is reverted; otherwise the
//! response data carries one result per message.
//!
//! # Query
//! Queries are read-only and independent: each reports its own success or
//! failure without affecting its siblings.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
