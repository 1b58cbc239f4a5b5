//! Polytone Note - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;
use polytone::Msg;

use crate::error::ContractError;
use crate::execute::{initiator, submit};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_active_channel, query_block_max_gas, query_controller, query_pair,
    query_pending_request, query_pending_requests, query_sequence,
};
use crate::state::{
    Config, CALLBACK_GAS_RESERVE, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, PAIR, REPLY_CALLBACK,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.block_max_gas <= CALLBACK_GAS_RESERVE {
        return Err(ContractError::InvalidBlockMaxGas {
            min: CALLBACK_GAS_RESERVE,
        });
    }

    let controller = msg
        .controller
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let mut response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("block_max_gas", msg.block_max_gas.to_string());
    if let Some(controller) = &controller {
        response = response.add_attribute("controller", controller);
    }
    if let Some(pair) = &msg.pair {
        PAIR.save(deps.storage, pair)?;
        response = response.add_attribute("pair", pair.describe());
    }

    CONFIG.save(
        deps.storage,
        &Config {
            block_max_gas: msg.block_max_gas,
            controller,
        },
    )?;

    Ok(response)
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Execute {
            msgs,
            timeout_seconds,
            callback,
            on_behalf_of,
        } => {
            let initiator = initiator(deps.as_ref(), &info, on_behalf_of)?;
            submit(
                deps,
                env,
                initiator,
                Msg::Execute { msgs },
                timeout_seconds,
                callback,
            )
        }
        ExecuteMsg::Query {
            msgs,
            timeout_seconds,
            callback,
            on_behalf_of,
        } => {
            let initiator = initiator(deps.as_ref(), &info, on_behalf_of)?;
            submit(
                deps,
                env,
                initiator,
                Msg::Query { msgs },
                timeout_seconds,
                Some(callback),
            )
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Callbacks are dispatched reply-on-error, so only failed deliveries land
/// here. The failure is recorded and the resolution stands.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (REPLY_CALLBACK, SubMsgResult::Err(err)) => Ok(Response::new()
            .add_attribute("method", "callback_failed")
            .add_attribute("callback_error", err)),
        (REPLY_CALLBACK, SubMsgResult::Ok(_)) => {
            Ok(Response::new().add_attribute("method", "callback_delivered"))
        }
        (id, _) => Err(ContractError::UnknownReply { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ActiveChannel {} => to_json_binary(&query_active_channel(deps)?),
        QueryMsg::Pair {} => to_json_binary(&query_pair(deps)?),
        QueryMsg::BlockMaxGas {} => to_json_binary(&query_block_max_gas(deps)?),
        QueryMsg::Controller {} => to_json_binary(&query_controller(deps)?),
        QueryMsg::Sequence { channel_id } => to_json_binary(&query_sequence(deps, channel_id)?),
        QueryMsg::PendingRequest {
            channel_id,
            sequence,
        } => to_json_binary(&query_pending_request(deps, channel_id, sequence)?),
        QueryMsg::PendingRequests { start_after, limit } => {
            to_json_binary(&query_pending_requests(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
