//! Per-channel handshake state.
//!
//! Both the note and the voice keep their own view of every channel they
//! have handshaken on. Progress only moves forward:
//! INIT / TRYOPEN -> OPEN -> CLOSED, and CLOSED is terminal. A channel id
//! that was ever recorded can not be opened a second time.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{IbcChannel, IbcEndpoint, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::PolytoneError;

#[cw_serde]
#[derive(Copy, Eq)]
pub enum ChannelState {
    Init,
    TryOpen,
    Open,
    Closed,
}

impl ChannelState {
    fn progress(self) -> u8 {
        match self {
            ChannelState::Init => 0,
            ChannelState::TryOpen => 1,
            ChannelState::Open => 2,
            ChannelState::Closed => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelState::Init => "INIT",
            ChannelState::TryOpen => "TRYOPEN",
            ChannelState::Open => "OPEN",
            ChannelState::Closed => "CLOSED",
        }
    }

    /// Whether a channel in this state may move to `next`.
    pub fn can_advance_to(self, next: ChannelState) -> bool {
        next.progress() > self.progress()
    }
}

/// A channel as seen from this end.
#[cw_serde]
pub struct ChannelInfo {
    /// Our port and channel id
    pub endpoint: IbcEndpoint,
    /// The remote port and channel id
    pub counterparty_endpoint: IbcEndpoint,
    pub connection_id: String,
    pub state: ChannelState,
}

/// Key: local channel id, Value: ChannelInfo
pub const CHANNELS: Map<&str, ChannelInfo> = Map::new("polytone-channels");

/// Record the first handshake step for a channel id never seen before.
pub fn record_open(
    storage: &mut dyn Storage,
    channel: &IbcChannel,
    state: ChannelState,
) -> Result<ChannelInfo, PolytoneError> {
    let channel_id = channel.endpoint.channel_id.as_str();
    if let Some(existing) = CHANNELS.may_load(storage, channel_id)? {
        return Err(PolytoneError::ChannelExists {
            channel_id: channel_id.to_string(),
            state: existing.state.as_str().to_string(),
        });
    }

    let info = ChannelInfo {
        endpoint: channel.endpoint.clone(),
        counterparty_endpoint: channel.counterparty_endpoint.clone(),
        connection_id: channel.connection_id.clone(),
        state,
    };
    CHANNELS.save(storage, channel_id, &info)?;
    Ok(info)
}

/// Move a recorded channel forward.
pub fn advance(
    storage: &mut dyn Storage,
    channel_id: &str,
    next: ChannelState,
) -> Result<ChannelInfo, PolytoneError> {
    transition(storage, channel_id, next, |_| {})
}

/// Move a recorded channel to OPEN. The remote channel id is unknown at
/// OpenInit, so endpoints and connection are taken from the connect step.
pub fn record_connect(
    storage: &mut dyn Storage,
    channel: &IbcChannel,
) -> Result<ChannelInfo, PolytoneError> {
    transition(
        storage,
        &channel.endpoint.channel_id,
        ChannelState::Open,
        |info| {
            info.endpoint = channel.endpoint.clone();
            info.counterparty_endpoint = channel.counterparty_endpoint.clone();
            info.connection_id = channel.connection_id.clone();
        },
    )
}

fn transition(
    storage: &mut dyn Storage,
    channel_id: &str,
    next: ChannelState,
    update: impl FnOnce(&mut ChannelInfo),
) -> Result<ChannelInfo, PolytoneError> {
    let mut info = CHANNELS
        .may_load(storage, channel_id)?
        .ok_or_else(|| PolytoneError::InvalidTransition {
            channel_id: channel_id.to_string(),
            from: "UNINITIALIZED".to_string(),
            to: next.as_str().to_string(),
        })?;

    if !info.state.can_advance_to(next) {
        return Err(PolytoneError::InvalidTransition {
            channel_id: channel_id.to_string(),
            from: info.state.as_str().to_string(),
            to: next.as_str().to_string(),
        });
    }

    update(&mut info);
    info.state = next;
    CHANNELS.save(storage, channel_id, &info)?;
    Ok(info)
}

/// Load a channel and require it to be OPEN.
pub fn ensure_open(storage: &dyn Storage, channel_id: &str) -> Result<ChannelInfo, PolytoneError> {
    match CHANNELS.may_load(storage, channel_id)? {
        Some(info) if info.state == ChannelState::Open => Ok(info),
        _ => Err(PolytoneError::ChannelNotOpen {
            channel_id: channel_id.to_string(),
        }),
    }
}

pub fn channel_info(storage: &dyn Storage, channel_id: &str) -> StdResult<Option<ChannelInfo>> {
    CHANNELS.may_load(storage, channel_id)
}
