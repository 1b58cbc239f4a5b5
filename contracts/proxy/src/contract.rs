//! Polytone Proxy - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, to_json_vec, Binary, ContractResult, CosmosMsg, Deps, DepsMut,
    Empty, Env, MessageInfo, QueryRequest, Reply, Response, StdError, StdResult, SubMsg,
    SystemResult, WasmMsg,
};
use cw2::set_contract_version;
use polytone::data::execute_response_data;
use polytone::Capability;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, ExecutionResponse, InstantiateMsg, MigrateMsg, OwnerResponse, QueryBatchResponse,
    QueryMsg,
};
use crate::state::{Slot, COLLECTOR, CONTRACT_NAME, CONTRACT_VERSION, OWNER};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    OWNER.save(deps.storage, &Capability::ProxyOwner(info.sender.clone()))?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender))
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
        ExecuteMsg::Proxy { msgs } => execute_proxy(deps, env, info, msgs),
    }
}

/// Dispatch every message as a reply-on-success sub-message. Slot `i` of the
/// collector is filled by the reply with id `i`; the reply to the last
/// message sets the response data.
fn execute_proxy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msgs: Vec<CosmosMsg<Empty>>,
) -> Result<Response, ContractError> {
    OWNER.load(deps.storage)?.ensure(&info.sender)?;

    let count = msgs.len();
    let response = Response::new()
        .add_attribute("method", "proxy")
        .add_attribute("msg_count", count.to_string());

    if msgs.is_empty() {
        let data = ExecutionResponse {
            executed_by: env.contract.address.to_string(),
            results: vec![],
        };
        return Ok(response.set_data(to_json_binary(&data)?));
    }

    let slots: Vec<Slot> = msgs
        .iter()
        .map(|msg| Slot {
            wasm_execute: matches!(msg, CosmosMsg::Wasm(WasmMsg::Execute { .. })),
            data: None,
        })
        .collect();
    COLLECTOR.save(deps.storage, &slots)?;

    let submsgs = msgs
        .into_iter()
        .enumerate()
        .map(|(index, msg)| SubMsg::reply_on_success(msg, index as u64));

    Ok(response.add_submessages(submsgs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    let mut collector = COLLECTOR.load(deps.storage)?;
    let index = msg.id as usize;
    let response = msg.result.into_result().map_err(StdError::generic_err)?;

    let slot = collector
        .get_mut(index)
        .ok_or(ContractError::UnknownReply { id: msg.id })?;
    slot.data = Some(if slot.wasm_execute {
        execute_response_data(response.data)?
    } else {
        response.data.unwrap_or_default()
    });

    if index + 1 < collector.len() {
        COLLECTOR.save(deps.storage, &collector)?;
        return Ok(Response::new());
    }

    COLLECTOR.remove(deps.storage);
    let data = ExecutionResponse {
        executed_by: env.contract.address.to_string(),
        results: collector
            .into_iter()
            .map(|slot| slot.data.unwrap_or_default())
            .collect(),
    };

    Ok(Response::new()
        .add_attribute("method", "proxy_complete")
        .set_data(to_json_binary(&data)?))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Query { msgs } => to_json_binary(&query_batch(deps, msgs)?),
    }
}

fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: owner.holder().clone(),
    })
}

fn query_batch(deps: Deps, msgs: Vec<QueryRequest<Empty>>) -> StdResult<QueryBatchResponse> {
    let results = msgs
        .iter()
        .map(|request| run_query(deps, request))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(QueryBatchResponse { results })
}

fn run_query(deps: Deps, request: &QueryRequest<Empty>) -> StdResult<Result<Binary, String>> {
    let raw = to_json_vec(request)?;
    Ok(match deps.querier.raw_query(&raw) {
        SystemResult::Ok(ContractResult::Ok(value)) => Ok(value),
        SystemResult::Ok(ContractResult::Err(err)) => Err(err),
        SystemResult::Err(err) => Err(err.to_string()),
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
