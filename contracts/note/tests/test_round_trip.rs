//! A request followed from the note, through the voice and a proxy, back to
//! the callback receiver.
//!
//! IBC entry points run against mock dependencies, one set per chain. The
//! voice's `Rx` and the callback delivery run in a cw-multi-test `App` that
//! holds the voice, its proxies and the tester.

use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Empty, IbcAcknowledgement, IbcChannel,
    IbcChannelConnectMsg, IbcChannelOpenMsg, IbcEndpoint, IbcMsg, IbcOrder, IbcPacket,
    IbcPacketAckMsg, IbcPacketReceiveMsg, Reply, SubMsgResponse, SubMsgResult, WasmMsg,
};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use polytone::{Ack, CallbackMessage, CallbackRequest, CallbackResult};
use polytone_note::msg::{ExecuteMsg as NoteExecuteMsg, InstantiateMsg as NoteInstantiateMsg};
use polytone_note::state::REPLY_CALLBACK;
use polytone_tester::msg::{
    CallbackHistoryResponse, ExecuteMsg as TesterExecuteMsg, HelloHistoryResponse,
    QueryMsg as TesterQueryMsg,
};
use polytone_voice::msg::InstantiateMsg as VoiceInstantiateMsg;
use polytone_voice::state::REPLY_ACK;

const BLOCK_MAX_GAS: u64 = 100_000_000;
const NOTE_CHANNEL: &str = "channel-0";
const VOICE_CHANNEL: &str = "channel-1";

fn note_endpoint() -> IbcEndpoint {
    IbcEndpoint {
        port_id: "wasm.note".to_string(),
        channel_id: NOTE_CHANNEL.to_string(),
    }
}

fn voice_endpoint() -> IbcEndpoint {
    IbcEndpoint {
        port_id: "wasm.voice".to_string(),
        channel_id: VOICE_CHANNEL.to_string(),
    }
}

fn channel(endpoint: IbcEndpoint, counterparty: IbcEndpoint) -> IbcChannel {
    IbcChannel::new(
        endpoint,
        counterparty,
        IbcOrder::Unordered,
        "polytone-1",
        "connection-0",
    )
}

fn contract_voice() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        polytone_voice::contract::execute,
        polytone_voice::contract::instantiate,
        polytone_voice::contract::query,
    )
    .with_reply(polytone_voice::contract::reply);
    Box::new(contract)
}

fn contract_proxy() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        polytone_proxy::contract::execute,
        polytone_proxy::contract::instantiate,
        polytone_proxy::contract::query,
    )
    .with_reply(polytone_proxy::contract::reply);
    Box::new(contract)
}

fn contract_tester() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        polytone_tester::contract::execute,
        polytone_tester::contract::instantiate,
        polytone_tester::contract::query,
    );
    Box::new(contract)
}

#[test]
fn test_execute_round_trip_reaches_callback_history() {
    // Remote chain: voice, proxies and the tester
    let mut app = App::default();
    let admin = Addr::unchecked("admin");
    let voice_code = app.store_code(contract_voice());
    let proxy_code = app.store_code(contract_proxy());
    let tester_code = app.store_code(contract_tester());
    let voice_addr = app
        .instantiate_contract(
            voice_code,
            admin.clone(),
            &VoiceInstantiateMsg {
                proxy_code_id: proxy_code,
                block_max_gas: BLOCK_MAX_GAS,
            },
            &[],
            "voice",
            None,
        )
        .unwrap();
    let tester = app
        .instantiate_contract(
            tester_code,
            admin,
            &polytone_tester::msg::InstantiateMsg {},
            &[],
            "tester",
            None,
        )
        .unwrap();

    // Note side, channel opened from INIT
    let mut note = mock_dependencies();
    polytone_note::contract::instantiate(
        note.as_mut(),
        mock_env(),
        mock_info("admin", &[]),
        NoteInstantiateMsg {
            pair: None,
            controller: None,
            block_max_gas: BLOCK_MAX_GAS,
        },
    )
    .unwrap();
    polytone_note::ibc::ibc_channel_open(
        note.as_mut(),
        mock_env(),
        IbcChannelOpenMsg::new_init(channel(note_endpoint(), voice_endpoint())),
    )
    .unwrap();
    polytone_note::ibc::ibc_channel_connect(
        note.as_mut(),
        mock_env(),
        IbcChannelConnectMsg::new_ack(channel(note_endpoint(), voice_endpoint()), "polytone-1"),
    )
    .unwrap();

    // Voice side of the same channel
    let mut voice = mock_dependencies();
    polytone_voice::contract::instantiate(
        voice.as_mut(),
        mock_env(),
        mock_info("admin", &[]),
        VoiceInstantiateMsg {
            proxy_code_id: proxy_code,
            block_max_gas: BLOCK_MAX_GAS,
        },
    )
    .unwrap();
    polytone_voice::ibc::ibc_channel_open(
        voice.as_mut(),
        mock_env(),
        IbcChannelOpenMsg::new_try(channel(voice_endpoint(), note_endpoint()), "polytone-1"),
    )
    .unwrap();
    polytone_voice::ibc::ibc_channel_connect(
        voice.as_mut(),
        mock_env(),
        IbcChannelConnectMsg::new_confirm(channel(voice_endpoint(), note_endpoint())),
    )
    .unwrap();

    // Alice asks for `Hello { data: "ok" }` with a callback to the tester
    let hello = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: tester.to_string(),
        msg: to_json_binary(&TesterExecuteMsg::Hello {
            data: Binary::from(b"ok".to_vec()),
        })
        .unwrap(),
        funds: vec![],
    });
    let res = polytone_note::contract::execute(
        note.as_mut(),
        mock_env(),
        mock_info("alice", &[]),
        NoteExecuteMsg::Execute {
            msgs: vec![hello],
            timeout_seconds: 100,
            callback: Some(CallbackRequest {
                receiver: tester.to_string(),
                msg: Binary::from_base64("aGVsbG8K").unwrap(),
            }),
            on_behalf_of: None,
        },
    )
    .unwrap();
    let (data, timeout) = match &res.messages[0].msg {
        CosmosMsg::Ibc(IbcMsg::SendPacket { data, timeout, .. }) => (data.clone(), timeout.clone()),
        other => panic!("unexpected message: {:?}", other),
    };
    let packet = IbcPacket::new(data, note_endpoint(), voice_endpoint(), 1, timeout);

    // The voice receives the packet and dispatches `Rx` to itself
    let received = polytone_voice::ibc::ibc_packet_receive(
        voice.as_mut(),
        mock_env(),
        IbcPacketReceiveMsg::new(packet.clone(), Addr::unchecked("relayer")),
    )
    .unwrap();
    assert_eq!(received.messages.len(), 1);
    assert_eq!(received.messages[0].id, REPLY_ACK);
    let rx = match &received.messages[0].msg {
        CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) => msg.clone(),
        other => panic!("unexpected message: {:?}", other),
    };

    // `Rx` runs on the remote chain; its raw response data is what the
    // REPLY_ACK reply sees
    let executed = app
        .execute(
            voice_addr.clone(),
            WasmMsg::Execute {
                contract_addr: voice_addr.to_string(),
                msg: rx,
                funds: vec![],
            }
            .into(),
        )
        .unwrap();
    let acked = polytone_voice::contract::reply(
        voice.as_mut(),
        mock_env(),
        Reply {
            id: REPLY_ACK,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: executed.data,
            }),
        },
    )
    .unwrap();
    let ack_bytes = acked.data.unwrap();
    assert_eq!(
        Ack::decode(ack_bytes.as_slice()).unwrap(),
        Ack::success(1, vec![Ok(Binary::from(b"ok".to_vec()))])
    );

    // The note resolves the request and hands the callback over
    let resolved = polytone_note::ibc::ibc_packet_ack(
        note.as_mut(),
        mock_env(),
        IbcPacketAckMsg::new(
            IbcAcknowledgement::new(ack_bytes),
            packet,
            Addr::unchecked("relayer"),
        ),
    )
    .unwrap();
    assert_eq!(resolved.messages.len(), 1);
    assert_eq!(resolved.messages[0].id, REPLY_CALLBACK);
    app.execute(Addr::unchecked("note"), resolved.messages[0].msg.clone())
        .unwrap();

    let hellos: HelloHistoryResponse = app
        .wrap()
        .query_wasm_smart(&tester, &TesterQueryMsg::HelloHistory {})
        .unwrap();
    assert_eq!(hellos.history, vec![Binary::from(b"ok".to_vec())]);

    let callbacks: CallbackHistoryResponse = app
        .wrap()
        .query_wasm_smart(&tester, &TesterQueryMsg::History {})
        .unwrap();
    assert_eq!(
        callbacks.history,
        vec![CallbackMessage {
            initiator: Addr::unchecked("alice"),
            initiator_msg: Binary::from_base64("aGVsbG8K").unwrap(),
            result: CallbackResult::Success(vec![Ok(Binary::from(b"ok".to_vec()))]),
        }]
    );
}
