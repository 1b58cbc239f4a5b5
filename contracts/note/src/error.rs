//! Error types for the Polytone note.

use cosmwasm_std::StdError;
use polytone::PolytoneError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Polytone(#[from] PolytoneError),

    // ========================================================================
    // Submission Errors
    // ========================================================================

    #[error("No active channel: the note has not completed a handshake")]
    NoActiveChannel,

    #[error("Invalid timeout: timeout_seconds must be greater than zero")]
    InvalidTimeout,

    #[error("Unauthorized: only the controller may submit")]
    NotController,

    #[error("on_behalf_of requires a controller")]
    NoController,

    // ========================================================================
    // Handshake Errors
    // ========================================================================

    #[error("Channel {channel_id} is already the active channel")]
    ChannelAlreadyOpen { channel_id: String },

    #[error("Handshake does not match pair: expected {expected}, got {actual}")]
    PairMismatch { expected: String, actual: String },

    // ========================================================================
    // Other Errors
    // ========================================================================

    #[error("Invalid block max gas: must be greater than {min}")]
    InvalidBlockMaxGas { min: u64 },

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },
}
