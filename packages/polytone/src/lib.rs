//! Polytone - Shared Types for Cross-Chain Calls and Callbacks
//!
//! This package holds everything both ends of a Polytone channel must agree
//! on: the packet and acknowledgement encodings, the channel handshake, the
//! per-channel handshake state, and the callback payloads delivered to
//! receivers once a request resolves.
//!
//! # Roles
//! - `note` sends packets and resolves them on ack or timeout
//! - `voice` receives packets and drives one proxy per remote sender
//! - `proxy` executes a batch on behalf of a remote sender
//! - callback receivers (`tester`, `listener`) consume resolved results

pub mod ack;
pub mod auth;
pub mod callback;
pub mod channel;
pub mod data;
pub mod error;
pub mod handshake;
pub mod packet;

pub use crate::ack::{Ack, Outcome};
pub use crate::auth::Capability;
pub use crate::callback::{CallbackMessage, CallbackMsg, CallbackRequest, CallbackResult};
pub use crate::channel::{ChannelInfo, ChannelState};
pub use crate::error::PolytoneError;
pub use crate::packet::{Msg, Packet};
