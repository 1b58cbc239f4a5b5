//! Callback payloads delivered by a note to the receiver a caller chose.
//!
//! Receivers expose an execute variant `{"callback": CallbackMessage}`;
//! [`CallbackMsg`] is that variant on its own so the note can build it
//! without knowing the receiver's full message type.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, StdResult, WasmMsg};

use crate::ack::Outcome;

/// Caller-supplied callback descriptor attached to a request.
#[cw_serde]
pub struct CallbackRequest {
    /// Contract that receives the resolved result
    pub receiver: String,
    /// Opaque token handed back verbatim with the result
    pub msg: Binary,
}

/// How a request resolved.
#[cw_serde]
pub enum CallbackResult {
    /// Remote batch ran; one entry per operation in submission order.
    Success(Vec<Result<Binary, String>>),
    /// Remote batch failed as a whole.
    ExecutionError(String),
    /// No acknowledgement arrived before the packet timed out.
    Timeout,
}

impl From<Outcome> for CallbackResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success(results) => CallbackResult::Success(results),
            Outcome::Failure(reason) => CallbackResult::ExecutionError(reason),
        }
    }
}

#[cw_serde]
pub struct CallbackMessage {
    /// Address that submitted the request to the note
    pub initiator: Addr,
    /// The opaque token from the callback request
    pub initiator_msg: Binary,
    pub result: CallbackResult,
}

#[cw_serde]
pub enum CallbackMsg {
    Callback(CallbackMessage),
}

impl CallbackMessage {
    /// Wasm execute delivering this message to `receiver`.
    pub fn into_wasm_msg(self, receiver: &Addr) -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: receiver.to_string(),
            msg: to_json_binary(&CallbackMsg::Callback(self))?,
            funds: vec![],
        })
    }
}
