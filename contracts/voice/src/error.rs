//! Error types for the Polytone voice.

use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use polytone::PolytoneError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Polytone(#[from] PolytoneError),

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid block max gas: must be greater than {min}")]
    InvalidBlockMaxGas { min: u64 },

    // ========================================================================
    // Dispatch Errors
    // ========================================================================

    #[error("Unauthorized: only the voice itself may dispatch Rx")]
    NotSelf,

    #[error("Proxy already bound for sender {sender} on {channel_id}")]
    ProxyAlreadyBound { channel_id: String, sender: String },

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },

    #[error("Voice does not send packets")]
    NoOutboundPackets,

    // ========================================================================
    // Acknowledged Failures
    // ========================================================================

    #[error("Gas exceeded: batch exceeded the execution limit of {limit}")]
    GasExceeded { limit: u64 },

    #[error("Execution error: {reason}")]
    ExecutionFailed { reason: String },
}
