//! Polytone Listener
//!
//! Stores the latest result of each request made through one note, keyed by
//! `(initiator, initiator_msg)`. Callbacks from any other address are
//! refused.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
