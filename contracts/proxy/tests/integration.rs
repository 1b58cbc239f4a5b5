//! Integration tests for the Polytone proxy using cw-multi-test.
//!
//! The tester contract stands in for arbitrary remote targets.

use cosmwasm_std::{
    coins, from_json, to_json_binary, Addr, BalanceResponse, BankMsg, BankQuery, Binary,
    CosmosMsg, Empty, QueryRequest, WasmMsg, WasmQuery,
};
use cw_multi_test::{App, ContractWrapper, Executor};

use polytone_proxy::msg::{
    ExecuteMsg, ExecutionResponse, InstantiateMsg, OwnerResponse, QueryBatchResponse, QueryMsg,
};
use polytone_tester::msg::{
    ExecuteMsg as TesterExecuteMsg, HelloHistoryResponse, QueryMsg as TesterQueryMsg,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_proxy() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        polytone_proxy::contract::execute,
        polytone_proxy::contract::instantiate,
        polytone_proxy::contract::query,
    )
    .with_reply(polytone_proxy::contract::reply);
    Box::new(contract)
}

fn contract_tester() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        polytone_tester::contract::execute,
        polytone_tester::contract::instantiate,
        polytone_tester::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    voice: Addr,
    proxy: Addr,
    tester: Addr,
}

fn setup() -> TestEnv {
    let voice = Addr::unchecked("voice");
    let mut app = App::new(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &voice, coins(1_000, "ucoin"))
            .unwrap();
    });

    let proxy_code = app.store_code(contract_proxy());
    let tester_code = app.store_code(contract_tester());

    let proxy = app
        .instantiate_contract(proxy_code, voice.clone(), &InstantiateMsg {}, &[], "proxy", None)
        .unwrap();
    let tester = app
        .instantiate_contract(
            tester_code,
            voice.clone(),
            &polytone_tester::msg::InstantiateMsg {},
            &[],
            "tester",
            None,
        )
        .unwrap();

    app.send_tokens(voice.clone(), proxy.clone(), &coins(100, "ucoin"))
        .unwrap();

    TestEnv {
        app,
        voice,
        proxy,
        tester,
    }
}

fn hello(tester: &Addr, data: &[u8]) -> CosmosMsg {
    CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: tester.to_string(),
        msg: to_json_binary(&TesterExecuteMsg::Hello {
            data: Binary::from(data),
        })
        .unwrap(),
        funds: vec![],
    })
}

fn fail(tester: &Addr) -> CosmosMsg {
    CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: tester.to_string(),
        msg: to_json_binary(&TesterExecuteMsg::Fail {
            reason: "remote failure".to_string(),
        })
        .unwrap(),
        funds: vec![],
    })
}

fn hello_history(env: &TestEnv) -> Vec<Binary> {
    let res: HelloHistoryResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.tester, &TesterQueryMsg::HelloHistory {})
        .unwrap();
    res.history
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_owner_is_instantiator() {
    let env = setup();

    let res: OwnerResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.proxy, &QueryMsg::Owner {})
        .unwrap();
    assert_eq!(res.owner, env.voice);
}

#[test]
fn test_non_owner_rejected() {
    let mut env = setup();

    let res = env.app.execute_contract(
        Addr::unchecked("mallory"),
        env.proxy.clone(),
        &ExecuteMsg::Proxy {
            msgs: vec![hello(&env.tester, b"hi")],
        },
        &[],
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);
    assert!(hello_history(&env).is_empty());
}

// ============================================================================
// Execute
// ============================================================================

#[test]
fn test_batch_results_in_order() {
    let mut env = setup();

    let res = env
        .app
        .execute_contract(
            env.voice.clone(),
            env.proxy.clone(),
            &ExecuteMsg::Proxy {
                msgs: vec![
                    hello(&env.tester, b"ok"),
                    CosmosMsg::Bank(BankMsg::Send {
                        to_address: "friend".to_string(),
                        amount: coins(40, "ucoin"),
                    }),
                    hello(&env.tester, b"again"),
                ],
            },
            &[],
        )
        .unwrap();

    let data = res.data.unwrap();
    let response: ExecutionResponse = from_json(&data).unwrap();

    assert_eq!(response.executed_by, env.proxy.to_string());
    assert_eq!(
        response.results,
        vec![Binary::from(b"ok"), Binary::default(), Binary::from(b"again")]
    );
    assert_eq!(
        hello_history(&env),
        vec![Binary::from(b"ok"), Binary::from(b"again")]
    );

    let balance = env.app.wrap().query_balance("friend", "ucoin").unwrap();
    assert_eq!(balance.amount.u128(), 40);
}

#[test]
fn test_empty_batch_reports_no_results() {
    let mut env = setup();

    let res = env
        .app
        .execute_contract(
            env.voice.clone(),
            env.proxy.clone(),
            &ExecuteMsg::Proxy { msgs: vec![] },
            &[],
        )
        .unwrap();

    let data = res.data.unwrap();
    let response: ExecutionResponse = from_json(&data).unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn test_failing_message_reverts_whole_batch() {
    let mut env = setup();

    let res = env.app.execute_contract(
        env.voice.clone(),
        env.proxy.clone(),
        &ExecuteMsg::Proxy {
            msgs: vec![
                hello(&env.tester, b"first"),
                CosmosMsg::Bank(BankMsg::Send {
                    to_address: "friend".to_string(),
                    amount: coins(40, "ucoin"),
                }),
                fail(&env.tester),
            ],
        },
        &[],
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("remote failure"), "got: {}", err_str);

    assert!(hello_history(&env).is_empty());
    let balance = env.app.wrap().query_balance("friend", "ucoin").unwrap();
    assert!(balance.amount.is_zero());
    let balance = env
        .app
        .wrap()
        .query_balance(env.proxy.to_string(), "ucoin")
        .unwrap();
    assert_eq!(balance.amount.u128(), 100);
}

// ============================================================================
// Query
// ============================================================================

#[test]
fn test_query_failures_are_scoped() {
    let env = setup();

    let res: QueryBatchResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.proxy,
            &QueryMsg::Query {
                msgs: vec![
                    QueryRequest::Bank(BankQuery::Balance {
                        address: env.proxy.to_string(),
                        denom: "ucoin".to_string(),
                    }),
                    QueryRequest::Wasm(WasmQuery::Smart {
                        contract_addr: "missing".to_string(),
                        msg: to_json_binary(&TesterQueryMsg::History {}).unwrap(),
                    }),
                    QueryRequest::Wasm(WasmQuery::Smart {
                        contract_addr: env.tester.to_string(),
                        msg: to_json_binary(&TesterQueryMsg::HelloHistory {}).unwrap(),
                    }),
                ],
            },
        )
        .unwrap();

    assert_eq!(res.results.len(), 3);

    let balance: BalanceResponse = from_json(res.results[0].as_ref().unwrap()).unwrap();
    assert_eq!(balance.amount.amount.u128(), 100);

    assert!(res.results[1].is_err());

    let hellos: HelloHistoryResponse = from_json(res.results[2].as_ref().unwrap()).unwrap();
    assert!(hellos.history.is_empty());
}
