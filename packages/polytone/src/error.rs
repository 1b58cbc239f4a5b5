//! Protocol-level errors shared by every Polytone contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PolytoneError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Codec Errors
    // ========================================================================

    #[error("Decode error: {reason}")]
    Decode { reason: String },

    // ========================================================================
    // Handshake Errors
    // ========================================================================

    #[error("Handshake version mismatch: expected {expected}, got {actual}")]
    HandshakeVersionMismatch { expected: String, actual: String },

    #[error("Only unordered channels are supported")]
    OrderedChannel,

    #[error("Channel {channel_id} already exists in state {state}")]
    ChannelExists { channel_id: String, state: String },

    #[error("Channel {channel_id} cannot move from {from} to {to}")]
    InvalidTransition {
        channel_id: String,
        from: String,
        to: String,
    },

    #[error("Channel {channel_id} is not open")]
    ChannelNotOpen { channel_id: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: {role} is {expected}, got {sender}")]
    Unauthorized {
        role: String,
        expected: String,
        sender: String,
    },
}
