//! Request submission.

use cosmwasm_std::{Addr, Deps, DepsMut, Env, IbcMsg, IbcTimeout, MessageInfo, Response};
use polytone::channel::ensure_open;
use polytone::{CallbackRequest, Msg, Packet};

use crate::error::ContractError;
use crate::state::{
    PendingCallback, PendingRequest, RequestKind, ACTIVE_CHANNEL, CONFIG, PENDING, SEQUENCES,
};

/// Resolve who a request is submitted for.
///
/// Without a controller anyone submits for themselves. With one, only the
/// controller submits, for itself or for `on_behalf_of`.
pub fn initiator(
    deps: Deps,
    info: &MessageInfo,
    on_behalf_of: Option<String>,
) -> Result<Addr, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    match config.controller {
        None => match on_behalf_of {
            None => Ok(info.sender.clone()),
            Some(_) => Err(ContractError::NoController),
        },
        Some(controller) => {
            if info.sender != controller {
                return Err(ContractError::NotController);
            }
            match on_behalf_of {
                Some(addr) => Ok(deps.api.addr_validate(&addr)?),
                None => Ok(controller),
            }
        }
    }
}

pub fn submit(
    deps: DepsMut,
    env: Env,
    initiator: Addr,
    msg: Msg,
    timeout_seconds: u64,
    callback: Option<CallbackRequest>,
) -> Result<Response, ContractError> {
    if timeout_seconds == 0 {
        return Err(ContractError::InvalidTimeout);
    }

    let channel_id = ACTIVE_CHANNEL
        .may_load(deps.storage)?
        .ok_or(ContractError::NoActiveChannel)?;
    ensure_open(deps.storage, &channel_id)?;

    let callback = match callback {
        Some(callback) => Some(PendingCallback {
            receiver: deps.api.addr_validate(&callback.receiver)?,
            msg: callback.msg,
        }),
        None => None,
    };

    let sequence = SEQUENCES
        .may_load(deps.storage, &channel_id)?
        .unwrap_or_default()
        + 1;
    SEQUENCES.save(deps.storage, &channel_id, &sequence)?;

    let kind = match msg {
        Msg::Execute { .. } => RequestKind::Execute,
        Msg::Query { .. } => RequestKind::Query,
    };
    let has_callback = callback.is_some();
    PENDING.save(
        deps.storage,
        (&channel_id, sequence),
        &PendingRequest {
            initiator: initiator.clone(),
            kind,
            operation_count: msg.len() as u64,
            timeout_seconds,
            callback,
        },
    )?;

    let packet = Packet {
        sequence,
        sender: initiator.to_string(),
        msg,
        timeout_seconds,
    };
    let send = IbcMsg::SendPacket {
        channel_id: channel_id.clone(),
        data: packet.encode()?,
        timeout: IbcTimeout::with_timestamp(env.block.time.plus_seconds(timeout_seconds)),
    };

    Ok(Response::new()
        .add_attribute("method", packet.msg.kind())
        .add_attribute("channel_id", channel_id)
        .add_attribute("sequence", sequence.to_string())
        .add_attribute("initiator", initiator)
        .add_attribute("callback", has_callback.to_string())
        .add_message(send))
}
