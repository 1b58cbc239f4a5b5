//! Query handlers for the Polytone voice.

use cosmwasm_std::{Deps, StdError, StdResult};
use polytone::channel::channel_info;

use crate::msg::{BlockMaxGasResponse, ChannelResponse, ProxyCodeIdResponse, ProxyResponse};
use crate::state::{SenderInfo, CONFIG, PROXIES, SENDERS};

pub fn query_block_max_gas(deps: Deps) -> StdResult<BlockMaxGasResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(BlockMaxGasResponse {
        block_max_gas: config.block_max_gas,
    })
}

pub fn query_proxy_code_id(deps: Deps) -> StdResult<ProxyCodeIdResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ProxyCodeIdResponse {
        proxy_code_id: config.proxy_code_id,
    })
}

pub fn query_proxy(deps: Deps, channel_id: String, sender: String) -> StdResult<ProxyResponse> {
    let proxy = PROXIES.may_load(deps.storage, (&channel_id, &sender))?;
    Ok(ProxyResponse { proxy })
}

pub fn query_sender_info_for_proxy(deps: Deps, proxy: String) -> StdResult<SenderInfo> {
    let proxy = deps.api.addr_validate(&proxy)?;
    SENDERS
        .may_load(deps.storage, &proxy)?
        .ok_or_else(|| StdError::not_found(format!("sender for proxy {}", proxy)))
}

pub fn query_channel(deps: Deps, channel_id: String) -> StdResult<ChannelResponse> {
    Ok(ChannelResponse {
        channel: channel_info(deps.storage, &channel_id)?,
    })
}
