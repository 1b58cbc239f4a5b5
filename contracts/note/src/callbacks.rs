//! Correlating acks and timeouts with pending requests.
//!
//! A pending request is removed by whichever of its ack or timeout arrives
//! first; the other then finds nothing and is ignored. This is what makes
//! every callback fire exactly once.

use cosmwasm_std::{Addr, Storage, SubMsg};
use polytone::{Ack, CallbackMessage, CallbackResult};

use crate::error::ContractError;
use crate::state::{PendingRequest, PENDING, REPLY_CALLBACK};

/// A request removed from the pending table.
pub struct Resolved {
    pub initiator: Addr,
    /// Delivery of the result, if a callback was requested
    pub callback: Option<SubMsg>,
}

/// Interpret raw acknowledgement bytes for the packet with `sequence`.
pub fn ack_result(sequence: u64, data: &[u8]) -> CallbackResult {
    match Ack::decode(data) {
        Ok(ack) if ack.sequence == sequence => ack.outcome.into(),
        Ok(ack) => CallbackResult::ExecutionError(format!(
            "acknowledgement for sequence {} received for packet {}",
            ack.sequence, sequence
        )),
        Err(err) => CallbackResult::ExecutionError(err.to_string()),
    }
}

/// Remove the pending request for `(channel_id, sequence)` and build its
/// callback. Returns `None` if there is nothing pending under that key.
pub fn resolve(
    storage: &mut dyn Storage,
    channel_id: &str,
    sequence: u64,
    result: CallbackResult,
    gas_limit: u64,
) -> Result<Option<Resolved>, ContractError> {
    let key = (channel_id, sequence);
    let Some(request) = PENDING.may_load(storage, key)? else {
        return Ok(None);
    };
    PENDING.remove(storage, key);

    let PendingRequest {
        initiator,
        callback,
        ..
    } = request;

    let callback = match callback {
        Some(callback) => {
            let message = CallbackMessage {
                initiator: initiator.clone(),
                initiator_msg: callback.msg,
                result,
            };
            let msg = message.into_wasm_msg(&callback.receiver)?;
            Some(SubMsg::reply_on_error(msg, REPLY_CALLBACK).with_gas_limit(gas_limit))
        }
        None => None,
    };

    Ok(Some(Resolved {
        initiator,
        callback,
    }))
}
