//! Query handlers for the Polytone note.

use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ActiveChannelResponse, BlockMaxGasResponse, ControllerResponse, PairResponse,
    PendingRequestEntry, PendingRequestResponse, PendingRequestsResponse, SequenceResponse,
};
use crate::state::{ACTIVE_CHANNEL, CONFIG, PAIR, PENDING, SEQUENCES};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_active_channel(deps: Deps) -> StdResult<ActiveChannelResponse> {
    Ok(ActiveChannelResponse {
        channel_id: ACTIVE_CHANNEL.may_load(deps.storage)?,
    })
}

pub fn query_pair(deps: Deps) -> StdResult<PairResponse> {
    Ok(PairResponse {
        pair: PAIR.may_load(deps.storage)?,
    })
}

pub fn query_block_max_gas(deps: Deps) -> StdResult<BlockMaxGasResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(BlockMaxGasResponse {
        block_max_gas: config.block_max_gas,
    })
}

pub fn query_controller(deps: Deps) -> StdResult<ControllerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ControllerResponse {
        controller: config.controller,
    })
}

pub fn query_sequence(deps: Deps, channel_id: String) -> StdResult<SequenceResponse> {
    let sequence = SEQUENCES
        .may_load(deps.storage, &channel_id)?
        .unwrap_or_default();
    Ok(SequenceResponse { sequence })
}

pub fn query_pending_request(
    deps: Deps,
    channel_id: String,
    sequence: u64,
) -> StdResult<PendingRequestResponse> {
    Ok(PendingRequestResponse {
        request: PENDING.may_load(deps.storage, (&channel_id, sequence))?,
    })
}

/// Query paginated pending requests.
pub fn query_pending_requests(
    deps: Deps,
    start_after: Option<(String, u64)>,
    limit: Option<u32>,
) -> StdResult<PendingRequestsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<(&str, u64)>> = start_after
        .as_ref()
        .map(|(channel_id, sequence)| Bound::exclusive((channel_id.as_str(), *sequence)));

    let requests = PENDING
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let ((channel_id, sequence), request) = item?;
            Ok(PendingRequestEntry {
                channel_id,
                sequence,
                request,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PendingRequestsResponse { requests })
}
