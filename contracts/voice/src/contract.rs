//! Polytone Voice - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_block_max_gas, query_channel, query_proxy, query_proxy_code_id,
    query_sender_info_for_proxy,
};
use crate::rx::{execute_rx, reply_ack, reply_forward_data, reply_init_proxy};
use crate::state::{
    Config, ACK_GAS_NEEDED, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REPLY_ACK,
    REPLY_FORWARD_DATA, REPLY_INIT_PROXY,
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

    if msg.block_max_gas <= ACK_GAS_NEEDED {
        return Err(ContractError::InvalidBlockMaxGas {
            min: ACK_GAS_NEEDED,
        });
    }

    let config = Config {
        proxy_code_id: msg.proxy_code_id,
        block_max_gas: msg.block_max_gas,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("proxy_code_id", config.proxy_code_id.to_string())
        .add_attribute("block_max_gas", config.block_max_gas.to_string())
        .add_attribute(
            "execution_gas_limit",
            config.execution_gas_limit().to_string(),
        ))
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
        ExecuteMsg::Rx { channel_id, packet } => execute_rx(deps, env, info, channel_id, packet),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_ACK => reply_ack(deps, msg.result),
        REPLY_INIT_PROXY => reply_init_proxy(deps, env, msg),
        REPLY_FORWARD_DATA => reply_forward_data(msg.result),
        id => Err(ContractError::UnknownReply { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::BlockMaxGas {} => to_json_binary(&query_block_max_gas(deps)?),
        QueryMsg::ProxyCodeId {} => to_json_binary(&query_proxy_code_id(deps)?),
        QueryMsg::Proxy { channel_id, sender } => {
            to_json_binary(&query_proxy(deps, channel_id, sender)?)
        }
        QueryMsg::SenderInfoForProxy { proxy } => {
            to_json_binary(&query_sender_info_for_proxy(deps, proxy)?)
        }
        QueryMsg::Channel { channel_id } => to_json_binary(&query_channel(deps, channel_id)?),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{BlockMaxGasResponse, ProxyCodeIdResponse, ProxyResponse};
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    #[test]
    fn test_instantiate() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            proxy_code_id: 7,
            block_max_gas: 100_000_000,
        };
        let res = instantiate(deps.as_mut(), mock_env(), mock_info("admin", &[]), msg).unwrap();
        assert!(res
            .attributes
            .iter()
            .any(|a| a.key == "execution_gas_limit"
                && a.value == (100_000_000 - ACK_GAS_NEEDED).to_string()));

        let res: BlockMaxGasResponse = from_json(
            &query(deps.as_ref(), mock_env(), QueryMsg::BlockMaxGas {}).unwrap(),
        )
        .unwrap();
        assert_eq!(res.block_max_gas, 100_000_000);

        let res: ProxyCodeIdResponse = from_json(
            &query(deps.as_ref(), mock_env(), QueryMsg::ProxyCodeId {}).unwrap(),
        )
        .unwrap();
        assert_eq!(res.proxy_code_id, 7);

        let res: ProxyResponse = from_json(
            &query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::Proxy {
                    channel_id: "channel-0".to_string(),
                    sender: "remote".to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(res.proxy, None);
    }

    #[test]
    fn test_instantiate_rejects_tiny_block_gas() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            proxy_code_id: 7,
            block_max_gas: ACK_GAS_NEEDED,
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info("admin", &[]), msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidBlockMaxGas {
                min: ACK_GAS_NEEDED
            }
        );
    }

    #[test]
    fn test_instantiate_rejects_contract_addr_len() {
        let err = from_json::<InstantiateMsg>(
            r#"{"proxy_code_id":1,"block_max_gas":100000000,"contract_addr_len":32}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("contract_addr_len"));

        let msg: InstantiateMsg =
            from_json(r#"{"proxy_code_id":1,"block_max_gas":100000000}"#).unwrap();
        assert_eq!(msg.proxy_code_id, 1);
    }

    #[test]
    fn test_unknown_reply() {
        let mut deps = mock_dependencies();
        let msg = Reply {
            id: 99,
            result: cosmwasm_std::SubMsgResult::Err("nope".to_string()),
        };
        let err = reply(deps.as_mut(), mock_env(), msg).unwrap_err();
        assert_eq!(err, ContractError::UnknownReply { id: 99 });
    }
}
