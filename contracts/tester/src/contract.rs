use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult,
};
use cw2::set_contract_version;
use polytone::CallbackMessage;

use crate::error::ContractError;
use crate::msg::{
    CallbackHistoryResponse, ExecuteMsg, HelloHistoryResponse, InstantiateMsg, MigrateMsg,
    QueryMsg,
};
use crate::state::{
    CALLBACK_COUNT, CALLBACK_HISTORY, CONTRACT_NAME, CONTRACT_VERSION, GAS_BURNER, HELLO_COUNT,
    HELLO_HISTORY,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CALLBACK_COUNT.save(deps.storage, &0)?;
    HELLO_COUNT.save(deps.storage, &0)?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Callback(callback) => execute_callback(deps, info, callback),
        ExecuteMsg::Hello { data } => execute_hello(deps, data),
        ExecuteMsg::Fail { reason } => Err(ContractError::Failed { reason }),
        ExecuteMsg::RunOutOfGas {} => execute_run_out_of_gas(deps),
    }
}

fn execute_callback(
    deps: DepsMut,
    info: MessageInfo,
    callback: CallbackMessage,
) -> Result<Response, ContractError> {
    let index = CALLBACK_COUNT.load(deps.storage)?;
    CALLBACK_HISTORY.save(deps.storage, index, &callback)?;
    CALLBACK_COUNT.save(deps.storage, &(index + 1))?;

    Ok(Response::new()
        .add_attribute("method", "callback")
        .add_attribute("from", info.sender)
        .add_attribute("initiator", callback.initiator)
        .add_attribute("index", index.to_string()))
}

fn execute_hello(deps: DepsMut, data: Binary) -> Result<Response, ContractError> {
    let index = HELLO_COUNT.load(deps.storage)?;
    HELLO_HISTORY.save(deps.storage, index, &data)?;
    HELLO_COUNT.save(deps.storage, &(index + 1))?;

    Ok(Response::new()
        .add_attribute("method", "hello")
        .set_data(data))
}

fn execute_run_out_of_gas(deps: DepsMut) -> Result<Response, ContractError> {
    let mut counter = 0u64;
    loop {
        counter = counter.wrapping_add(1);
        GAS_BURNER.save(deps.storage, &counter)?;
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::History {} => to_json_binary(&query_history(deps)?),
        QueryMsg::HelloHistory {} => to_json_binary(&query_hello_history(deps)?),
    }
}

fn query_history(deps: Deps) -> StdResult<CallbackHistoryResponse> {
    let history = CALLBACK_HISTORY
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, callback)| callback))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(CallbackHistoryResponse { history })
}

fn query_hello_history(deps: Deps) -> StdResult<HelloHistoryResponse> {
    let history = HELLO_HISTORY
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, data)| data))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(HelloHistoryResponse { history })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
