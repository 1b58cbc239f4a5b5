use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use polytone::{CallbackMessage, Capability};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, NoteResponse, QueryMsg, ResultResponse};
use crate::state::{result_key, CONTRACT_NAME, CONTRACT_VERSION, NOTE, RESULTS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let note = deps.api.addr_validate(&msg.note)?;
    NOTE.save(deps.storage, &Capability::CallbackReceiver(note.clone()))?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("note", note))
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
    }
}

fn execute_callback(
    deps: DepsMut,
    info: MessageInfo,
    callback: CallbackMessage,
) -> Result<Response, ContractError> {
    NOTE.load(deps.storage)?.ensure(&info.sender)?;

    let initiator = callback.initiator.to_string();
    RESULTS.save(
        deps.storage,
        result_key(&initiator, &callback.initiator_msg),
        &callback,
    )?;

    Ok(Response::new()
        .add_attribute("method", "callback")
        .add_attribute("initiator", initiator))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Note {} => {
            let note = NOTE.load(deps.storage)?;
            to_json_binary(&NoteResponse {
                note: note.holder().clone(),
            })
        }
        QueryMsg::Result {
            initiator,
            initiator_msg,
        } => {
            let callback =
                RESULTS.may_load(deps.storage, result_key(&initiator, &initiator_msg))?;
            to_json_binary(&ResultResponse { callback })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
