//! Acknowledgement written by a voice for every packet it receives.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, StdResult};

use crate::error::PolytoneError;

/// Result of running a packet on the remote chain.
#[cw_serde]
pub enum Outcome {
    /// One entry per operation, in submission order.
    Success(Vec<Result<Binary, String>>),
    /// The packet as a whole failed (decode, authorization, gas or execution).
    Failure(String),
}

#[cw_serde]
pub struct Ack {
    /// Sequence of the packet being acknowledged
    pub sequence: u64,
    pub outcome: Outcome,
}

impl Ack {
    pub fn success(sequence: u64, results: Vec<Result<Binary, String>>) -> Self {
        Ack {
            sequence,
            outcome: Outcome::Success(results),
        }
    }

    pub fn failure(sequence: u64, reason: impl Into<String>) -> Self {
        Ack {
            sequence,
            outcome: Outcome::Failure(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn decode(data: &[u8]) -> Result<Self, PolytoneError> {
        from_json(data).map_err(|e| PolytoneError::Decode {
            reason: e.to_string(),
        })
    }
}
