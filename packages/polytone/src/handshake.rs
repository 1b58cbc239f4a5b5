//! Channel handshake validation.
//!
//! A Polytone channel is unordered and speaks exactly [`POLYTONE_VERSION`].
//! Any other proposal is refused at the step where it is seen, so a channel
//! with a mismatched version never reaches OPEN.

use cosmwasm_std::{
    Ibc3ChannelOpenResponse, IbcChannelConnectMsg, IbcChannelOpenMsg, IbcChannelOpenResponse,
    IbcOrder,
};

use crate::channel::ChannelState;
use crate::error::PolytoneError;

pub const POLYTONE_VERSION: &str = "polytone-1";

fn check_version(version: &str) -> Result<(), PolytoneError> {
    if version != POLYTONE_VERSION {
        return Err(PolytoneError::HandshakeVersionMismatch {
            expected: POLYTONE_VERSION.to_string(),
            actual: version.to_string(),
        });
    }
    Ok(())
}

/// Validate an OpenInit / OpenTry step.
pub fn open(msg: &IbcChannelOpenMsg) -> Result<IbcChannelOpenResponse, PolytoneError> {
    let channel = msg.channel();
    if channel.order != IbcOrder::Unordered {
        return Err(PolytoneError::OrderedChannel);
    }
    check_version(&channel.version)?;
    if let Some(counterparty_version) = msg.counterparty_version() {
        check_version(counterparty_version)?;
    }

    Ok(Some(Ibc3ChannelOpenResponse {
        version: POLYTONE_VERSION.to_string(),
    }))
}

/// State recorded after a successful open step.
pub fn opening_state(msg: &IbcChannelOpenMsg) -> ChannelState {
    if msg.counterparty_version().is_some() {
        ChannelState::TryOpen
    } else {
        ChannelState::Init
    }
}

/// Validate an OpenAck / OpenConfirm step.
pub fn connect(msg: &IbcChannelConnectMsg) -> Result<(), PolytoneError> {
    check_version(&msg.channel().version)?;
    if let Some(counterparty_version) = msg.counterparty_version() {
        check_version(counterparty_version)?;
    }
    Ok(())
}
