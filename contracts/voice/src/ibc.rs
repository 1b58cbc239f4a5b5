//! IBC entry points for the Polytone voice.

use cosmwasm_std::{
    entry_point, to_json_binary, DepsMut, Env, IbcBasicResponse, IbcChannelCloseMsg,
    IbcChannelConnectMsg, IbcChannelOpenMsg, IbcChannelOpenResponse, IbcPacketAckMsg,
    IbcPacketReceiveMsg, IbcPacketTimeoutMsg, IbcReceiveResponse, Never, SubMsg, WasmMsg,
};
use polytone::channel::{advance, ensure_open, record_connect, record_open};
use polytone::{handshake, Ack, ChannelState, Packet};

use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::state::{ACK_SEQUENCE, CONFIG, REPLY_ACK};

// ============================================================================
// Handshake
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_channel_open(
    deps: DepsMut,
    _env: Env,
    msg: IbcChannelOpenMsg,
) -> Result<IbcChannelOpenResponse, ContractError> {
    let response = handshake::open(&msg)?;
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
    record_connect(deps.storage, channel)?;

    Ok(IbcBasicResponse::new()
        .add_attribute("method", "ibc_channel_connect")
        .add_attribute("channel_id", &channel.endpoint.channel_id)
        .add_attribute("counterparty_port", &channel.counterparty_endpoint.port_id)
        .add_attribute("counterparty_channel", &channel.counterparty_endpoint.channel_id))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_channel_close(
    deps: DepsMut,
    _env: Env,
    msg: IbcChannelCloseMsg,
) -> Result<IbcBasicResponse, ContractError> {
    let channel_id = &msg.channel().endpoint.channel_id;
    advance(deps.storage, channel_id, ChannelState::Closed)?;

    Ok(IbcBasicResponse::new()
        .add_attribute("method", "ibc_channel_close")
        .add_attribute("channel_id", channel_id))
}

// ============================================================================
// Packets
// ============================================================================

/// Every packet is acknowledged. Failures before `Rx` is dispatched are
/// acknowledged here with the IBC sequence, which the note's counter tracks.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_packet_receive(
    deps: DepsMut,
    env: Env,
    msg: IbcPacketReceiveMsg,
) -> Result<IbcReceiveResponse, Never> {
    let ibc_sequence = msg.packet.sequence;
    match receive(deps, env, msg) {
        Ok(response) => Ok(response),
        Err(err) => {
            let response = IbcReceiveResponse::new()
                .add_attribute("method", "ibc_packet_receive")
                .add_attribute("error", err.to_string());
            Ok(match Ack::failure(ibc_sequence, err.to_string()).encode() {
                Ok(ack) => response.set_ack(ack),
                Err(_) => response,
            })
        }
    }
}

fn receive(
    deps: DepsMut,
    env: Env,
    msg: IbcPacketReceiveMsg,
) -> Result<IbcReceiveResponse, ContractError> {
    let channel_id = msg.packet.dest.channel_id;
    ensure_open(deps.storage, &channel_id)?;
    let packet = Packet::decode(msg.packet.data.as_slice())?;

    let config = CONFIG.load(deps.storage)?;
    ACK_SEQUENCE.save(deps.storage, &packet.sequence)?;

    let sequence = packet.sequence;
    let rx = WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::Rx {
            channel_id: channel_id.clone(),
            packet,
        })?,
        funds: vec![],
    };

    // Placeholder; the REPLY_ACK data replaces it.
    let placeholder = Ack::failure(sequence, "acknowledgement was not written").encode()?;

    Ok(IbcReceiveResponse::new()
        .add_attribute("method", "ibc_packet_receive")
        .add_attribute("channel_id", channel_id)
        .add_attribute("sequence", sequence.to_string())
        .set_ack(placeholder)
        .add_submessage(
            SubMsg::reply_always(rx, REPLY_ACK).with_gas_limit(config.execution_gas_limit()),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_packet_ack(
    _deps: DepsMut,
    _env: Env,
    _msg: IbcPacketAckMsg,
) -> Result<IbcBasicResponse, ContractError> {
    Err(ContractError::NoOutboundPackets)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn ibc_packet_timeout(
    _deps: DepsMut,
    _env: Env,
    _msg: IbcPacketTimeoutMsg,
) -> Result<IbcBasicResponse, ContractError> {
    Err(ContractError::NoOutboundPackets)
}
