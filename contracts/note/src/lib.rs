//! Polytone Note - Sender Side of a Polytone Channel
//!
//! A note owns one active channel to a remote voice. Local accounts submit
//! batches of messages or queries; the note numbers them per channel, sends
//! them as packets and, once the voice acknowledges or the packet times
//! out, delivers the outcome to the callback receiver named at submission.
//!
//! # Request Lifecycle
//! 1. `Execute` / `Query` stores a pending request under (channel, sequence)
//! 2. The packet is sent with a timestamp timeout
//! 3. An ack or a timeout removes the pending request exactly once
//! 4. The callback (if any) is delivered in a sub-message whose failure is
//!    recorded but never reverts the resolution

mod callbacks;
pub mod contract;
pub mod error;
mod execute;
pub mod ibc;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
