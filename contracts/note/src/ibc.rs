//! IBC entry points for the Polytone note.

use cosmwasm_std::{
    entry_point, DepsMut, Env, IbcBasicResponse, IbcChannel, IbcChannelCloseMsg,
    IbcChannelConnectMsg, IbcChannelOpenMsg, IbcChannelOpenResponse, IbcPacketAckMsg,
    IbcPacketReceiveMsg, IbcPacketTimeoutMsg, IbcReceiveResponse, Never, Storage,
};
use polytone::channel::{advance, record_connect, record_open};
use polytone::{handshake, Ack, CallbackResult, ChannelState, Packet};

use crate::callbacks::{ack_result, resolve};
use crate::error::ContractError;
use crate::state::{Pair, ACTIVE_CHANNEL, CONFIG, PAIR};

// ============================================================================
// Handshake
// ============================================================================

fn channel_pair(channel: &IbcChannel) -> Pair {
    Pair {
        connection_id: channel.connection_id.clone(),
        remote_port: channel.counterparty_endpoint.port_id.clone(),
    }
}

fn check_pair(storage: &dyn Storage, channel: &IbcChannel) -> Result<(), ContractError> {
    if let Some(pair) = PAIR.may_load(storage)? {
        let actual = channel_pair(channel);
        if actual != pair {
            return Err(ContractError::PairMismatch {
                expected: pair.describe(),
                actual: actual.describe(),
            });
        }
    }
    Ok(())
}

fn check_no_active_channel(storage: &dyn Storage) -> Result<(), ContractError> {
    match ACTIVE_CHANNEL.may_load(storage)? {
        Some(channel_id) => Err(ContractError::ChannelAlreadyOpen { channel_id }),
        None => Ok(()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_channel_open(
    deps: DepsMut,
    _env: Env,
    msg: IbcChannelOpenMsg,
) -> Result<IbcChannelOpenResponse, ContractError> {
    let response = handshake::open(&msg)?;
    check_pair(deps.storage, msg.channel())?;
    check_no_active_channel(deps.storage)?;
    record_open(deps.storage, msg.channel(), handshake::opening_state(&msg))?;
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_channel_connect(
    deps: DepsMut,
    _env: Env,
    msg: IbcChannelConnectMsg,
) -> Result<IbcBasicResponse, ContractError> {
    handshake::connect(&msg)?;
    let channel = msg.channel();
    check_pair(deps.storage, channel)?;
    check_no_active_channel(deps.storage)?;

    let channel_id = &channel.endpoint.channel_id;
    record_connect(deps.storage, channel)?;
    ACTIVE_CHANNEL.save(deps.storage, channel_id)?;
    if PAIR.may_load(deps.storage)?.is_none() {
        PAIR.save(deps.storage, &channel_pair(channel))?;
    }

    Ok(IbcBasicResponse::new()
        .add_attribute("method", "ibc_channel_connect")
        .add_attribute("channel_id", channel_id)
        .add_attribute("connection_id", &channel.connection_id)
        .add_attribute("counterparty_port", &channel.counterparty_endpoint.port_id))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_channel_close(
    deps: DepsMut,
    _env: Env,
    msg: IbcChannelCloseMsg,
) -> Result<IbcBasicResponse, ContractError> {
    let channel_id = &msg.channel().endpoint.channel_id;
    advance(deps.storage, channel_id, ChannelState::Closed)?;
    if ACTIVE_CHANNEL.may_load(deps.storage)?.as_ref() == Some(channel_id) {
        ACTIVE_CHANNEL.remove(deps.storage);
    }

    Ok(IbcBasicResponse::new()
        .add_attribute("method", "ibc_channel_close")
        .add_attribute("channel_id", channel_id))
}

// ============================================================================
// Packets
// ============================================================================

/// Notes only send. Anything received is refused with a failure ack.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_packet_receive(
    _deps: DepsMut,
    _env: Env,
    msg: IbcPacketReceiveMsg,
) -> Result<IbcReceiveResponse, Never> {
    let response = IbcReceiveResponse::new().add_attribute("method", "ibc_packet_receive");
    Ok(
        match Ack::failure(msg.packet.sequence, "note does not accept packets").encode() {
            Ok(ack) => response.set_ack(ack),
            Err(_) => response,
        },
    )
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_packet_ack(
    deps: DepsMut,
    _env: Env,
    msg: IbcPacketAckMsg,
) -> Result<IbcBasicResponse, ContractError> {
    let channel_id = msg.original_packet.src.channel_id;
    let packet = Packet::decode(msg.original_packet.data.as_slice())?;
    let result = ack_result(packet.sequence, msg.acknowledgement.data.as_slice());
    resolution(deps, "ibc_packet_ack", &channel_id, packet.sequence, result)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_packet_timeout(
    deps: DepsMut,
    _env: Env,
    msg: IbcPacketTimeoutMsg,
) -> Result<IbcBasicResponse, ContractError> {
    let channel_id = msg.packet.src.channel_id;
    let packet = Packet::decode(msg.packet.data.as_slice())?;
    resolution(
        deps,
        "ibc_packet_timeout",
        &channel_id,
        packet.sequence,
        CallbackResult::Timeout,
    )
}

fn resolution(
    deps: DepsMut,
    method: &str,
    channel_id: &str,
    sequence: u64,
    result: CallbackResult,
) -> Result<IbcBasicResponse, ContractError> {
    let outcome = match &result {
        CallbackResult::Success(_) => "success",
        CallbackResult::ExecutionError(_) => "execution_error",
        CallbackResult::Timeout => "timeout",
    };
    let gas_limit = CONFIG.load(deps.storage)?.callback_gas_limit();

    let response = IbcBasicResponse::new()
        .add_attribute("method", method)
        .add_attribute("channel_id", channel_id)
        .add_attribute("sequence", sequence.to_string());

    let Some(resolved) = resolve(deps.storage, channel_id, sequence, result, gas_limit)? else {
        return Ok(response.add_attribute("ignored", "true"));
    };

    let response = response
        .add_attribute("initiator", resolved.initiator)
        .add_attribute("outcome", outcome);
    Ok(match resolved.callback {
        Some(callback) => response.add_submessage(callback),
        None => response,
    })
}
