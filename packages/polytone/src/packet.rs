//! Request packet sent from a note to a voice.
//!
//! Packets are JSON encoded. Decoding is strict: unknown fields, missing
//! fields and truncated input all fail with [`PolytoneError::Decode`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, CosmosMsg, Empty, QueryRequest, StdResult};

use crate::error::PolytoneError;

/// The operations carried by a packet, tagged by kind.
#[cw_serde]
pub enum Msg {
    /// Execute the messages atomically on the sender's proxy.
    Execute { msgs: Vec<CosmosMsg<Empty>> },
    /// Run the queries independently of each other.
    Query { msgs: Vec<QueryRequest<Empty>> },
}

impl Msg {
    pub fn kind(&self) -> &'static str {
        match self {
            Msg::Execute { .. } => "execute",
            Msg::Query { .. } => "query",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Msg::Execute { msgs } => msgs.len(),
            Msg::Query { msgs } => msgs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Wire shape of a request.
#[cw_serde]
pub struct Packet {
    /// Per-channel sequence assigned by the note, echoed by the ack
    pub sequence: u64,
    /// Address of the initiator on the sending chain
    pub sender: String,
    /// Operations to run on the receiving chain
    pub msg: Msg,
    /// Relative timeout the note attached to this packet
    pub timeout_seconds: u64,
}

impl Packet {
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn decode(data: &[u8]) -> Result<Self, PolytoneError> {
        from_json(data).map_err(|e| PolytoneError::Decode {
            reason: e.to_string(),
        })
    }
}
