//! Callback delivery into the tester, as a note would perform it.

use cosmwasm_std::{Addr, Binary, CosmosMsg, Empty};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use polytone::{CallbackMessage, CallbackResult};
use polytone_tester::msg::{CallbackHistoryResponse, InstantiateMsg, QueryMsg};

fn contract_tester() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        polytone_tester::contract::execute,
        polytone_tester::contract::instantiate,
        polytone_tester::contract::query,
    );
    Box::new(contract)
}

#[test]
fn test_history_keeps_arrival_order_and_duplicates() {
    let mut app = App::default();
    let code_id = app.store_code(contract_tester());
    let tester = app
        .instantiate_contract(
            code_id,
            Addr::unchecked("admin"),
            &InstantiateMsg {},
            &[],
            "tester",
            None,
        )
        .unwrap();

    let success = CallbackMessage {
        initiator: Addr::unchecked("alice"),
        initiator_msg: Binary::from_base64("aGVsbG8K").unwrap(),
        result: CallbackResult::Success(vec![Ok(Binary::from(b"ok".to_vec()))]),
    };
    let timeout = CallbackMessage {
        initiator: Addr::unchecked("bob"),
        initiator_msg: Binary::default(),
        result: CallbackResult::Timeout,
    };

    // Any address may deliver, including two different notes
    for (from, message) in [
        ("note-a", success.clone()),
        ("note-b", timeout.clone()),
        ("note-a", success.clone()),
    ] {
        let msg: CosmosMsg = message.into_wasm_msg(&tester).unwrap().into();
        app.execute(Addr::unchecked(from), msg).unwrap();
    }

    let res: CallbackHistoryResponse = app
        .wrap()
        .query_wasm_smart(&tester, &QueryMsg::History {})
        .unwrap();
    assert_eq!(res.history, vec![success.clone(), timeout, success]);
}
