use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};
use polytone::CallbackMessage;

#[cw_serde]
pub struct InstantiateMsg {
    /// Note whose callbacks are accepted
    pub note: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    Callback(CallbackMessage),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(NoteResponse)]
    Note {},
    /// Latest callback for a request, if one arrived
    #[returns(ResultResponse)]
    Result {
        initiator: String,
        initiator_msg: Binary,
    },
}

#[cw_serde]
pub struct NoteResponse {
    pub note: Addr,
}

#[cw_serde]
pub struct ResultResponse {
    pub callback: Option<CallbackMessage>,
}
