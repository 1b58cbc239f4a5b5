//! Running received packets through proxies.
//!
//! `Rx` is only ever executed by the voice itself, wrapped in a gas-limited
//! sub-message by `ibc_packet_receive`. Everything it does (proxy creation
//! included) reverts together if the batch fails or runs out of gas.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, SubMsg, SubMsgResult, WasmMsg,
};
use cw_utils::parse_reply_instantiate_data;
use polytone::data::execute_response_data;
use polytone::{Ack, Msg, Packet};
use polytone_proxy::msg::{
    ExecuteMsg as ProxyExecuteMsg, ExecutionResponse, InstantiateMsg as ProxyInstantiateMsg,
    QueryBatchResponse, QueryMsg as ProxyQueryMsg,
};

use crate::error::ContractError;
use crate::hash::proxy_label;
use crate::state::{
    PendingDispatch, SenderInfo, ACK_SEQUENCE, CONFIG, PENDING_DISPATCH, PROXIES,
    REPLY_FORWARD_DATA, REPLY_INIT_PROXY, SENDERS,
};

// ============================================================================
// Rx
// ============================================================================

pub fn execute_rx(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    channel_id: String,
    packet: Packet,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::NotSelf);
    }

    let response = Response::new()
        .add_attribute("method", "rx")
        .add_attribute("channel_id", &channel_id)
        .add_attribute("sender", &packet.sender)
        .add_attribute("sequence", packet.sequence.to_string())
        .add_attribute("kind", packet.msg.kind())
        .add_attribute("msg_count", packet.msg.len().to_string());

    if let Some(proxy) = PROXIES.may_load(deps.storage, (&channel_id, &packet.sender))? {
        return dispatch(deps.as_ref(), response, proxy, packet.msg);
    }

    let config = CONFIG.load(deps.storage)?;
    let label = proxy_label(&channel_id, &packet.sender);
    PENDING_DISPATCH.save(
        deps.storage,
        &PendingDispatch {
            channel_id,
            sender: packet.sender,
            msg: packet.msg,
        },
    )?;

    let instantiate = WasmMsg::Instantiate {
        admin: Some(env.contract.address.to_string()),
        code_id: config.proxy_code_id,
        msg: to_json_binary(&ProxyInstantiateMsg {})?,
        funds: vec![],
        label: label.clone(),
    };

    Ok(response
        .add_attribute("proxy_label", label)
        .add_submessage(SubMsg::reply_on_success(instantiate, REPLY_INIT_PROXY)))
}

/// Hand a batch to an existing proxy. Executions come back through
/// `REPLY_FORWARD_DATA`; queries are answered in place.
fn dispatch(
    deps: Deps,
    response: Response,
    proxy: Addr,
    msg: Msg,
) -> Result<Response, ContractError> {
    match msg {
        Msg::Execute { msgs } => {
            let forward = WasmMsg::Execute {
                contract_addr: proxy.to_string(),
                msg: to_json_binary(&ProxyExecuteMsg::Proxy { msgs })?,
                funds: vec![],
            };
            Ok(response
                .add_attribute("proxy", proxy)
                .add_submessage(SubMsg::reply_on_success(forward, REPLY_FORWARD_DATA)))
        }
        Msg::Query { msgs } => {
            let batch: QueryBatchResponse = deps
                .querier
                .query_wasm_smart(&proxy, &ProxyQueryMsg::Query { msgs })?;
            Ok(response
                .add_attribute("proxy", proxy)
                .set_data(to_json_binary(&batch.results)?))
        }
    }
}

// ============================================================================
// Replies
// ============================================================================

/// Bind the new proxy and continue the dispatch that was waiting for it.
pub fn reply_init_proxy(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    let instantiated = parse_reply_instantiate_data(reply)?;
    let proxy = deps.api.addr_validate(&instantiated.contract_address)?;

    let pending = PENDING_DISPATCH.load(deps.storage)?;
    PENDING_DISPATCH.remove(deps.storage);

    let key = (pending.channel_id.as_str(), pending.sender.as_str());
    if PROXIES.has(deps.storage, key) {
        return Err(ContractError::ProxyAlreadyBound {
            channel_id: pending.channel_id,
            sender: pending.sender,
        });
    }
    PROXIES.save(deps.storage, key, &proxy)?;
    SENDERS.save(
        deps.storage,
        &proxy,
        &SenderInfo {
            channel_id: pending.channel_id.clone(),
            remote_sender: pending.sender.clone(),
        },
    )?;

    let response = Response::new()
        .add_attribute("method", "proxy_created")
        .add_attribute("channel_id", &pending.channel_id)
        .add_attribute("sender", &pending.sender);
    dispatch(deps.as_ref(), response, proxy, pending.msg)
}

/// Re-encode the proxy's `ExecutionResponse` as the per-message results
/// carried by the acknowledgement.
pub fn reply_forward_data(result: SubMsgResult) -> Result<Response, ContractError> {
    let response = result
        .into_result()
        .map_err(StdError::generic_err)?;
    let data = execute_response_data(response.data)?;
    let execution: ExecutionResponse = from_json(&data)?;

    let results: Vec<Result<Binary, String>> = execution.results.into_iter().map(Ok).collect();

    Ok(Response::new()
        .add_attribute("method", "forward_data")
        .add_attribute("executed_by", execution.executed_by)
        .set_data(to_json_binary(&results)?))
}

fn decode_results(data: Option<Binary>) -> Result<Vec<Result<Binary, String>>, ContractError> {
    let data = execute_response_data(data)?;
    if data.is_empty() {
        return Ok(vec![]);
    }
    Ok(from_json(&data)?)
}

/// Classify a failed `Rx`. The host reports an out-of-gas abort either as
/// `out of gas in location: ..` or, redacted, as sdk error code 11. Contract
/// errors that merely mention gas are execution errors.
pub fn classify_failure(error: &str, gas_limit: u64) -> ContractError {
    if error.contains("out of gas in location") || error.contains("codespace: sdk, code: 11") {
        ContractError::GasExceeded { limit: gas_limit }
    } else {
        ContractError::ExecutionFailed {
            reason: error.to_string(),
        }
    }
}

/// Write the acknowledgement for the packet `ACK_SEQUENCE` names. The
/// returned data replaces the placeholder ack set by `ibc_packet_receive`.
pub fn reply_ack(deps: DepsMut, result: SubMsgResult) -> Result<Response, ContractError> {
    let sequence = ACK_SEQUENCE.may_load(deps.storage)?.unwrap_or_default();
    ACK_SEQUENCE.remove(deps.storage);

    let ack = match result {
        SubMsgResult::Ok(response) => match decode_results(response.data) {
            Ok(results) => Ack::success(sequence, results),
            Err(err) => Ack::failure(sequence, err.to_string()),
        },
        SubMsgResult::Err(err) => {
            let gas_limit = CONFIG.load(deps.storage)?.execution_gas_limit();
            Ack::failure(sequence, classify_failure(&err, gas_limit).to_string())
        }
    };

    Ok(Response::new()
        .add_attribute("method", "ack")
        .add_attribute("sequence", sequence.to_string())
        .add_attribute("success", ack.is_success().to_string())
        .set_data(ack.encode()?))
}
