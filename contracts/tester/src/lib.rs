//! Polytone Tester - Callback Sink
//!
//! Appends every callback it is handed to an ordered history, without
//! deduplication, so tests can count exactly how many times a request was
//! resolved. It also exposes a few operations (`Hello`, `Fail`,
//! `RunOutOfGas`) used as remote calls when exercising a proxy.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
