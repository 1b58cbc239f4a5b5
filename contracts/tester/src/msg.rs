use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;
use polytone::CallbackMessage;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Record a resolved Polytone request
    Callback(CallbackMessage),
    /// Record `data` and return it as the response data
    Hello { data: Binary },
    /// Always fails with `reason`
    Fail { reason: String },
    /// Writes to storage until the gas limit is hit
    RunOutOfGas {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Every callback received, in arrival order
    #[returns(CallbackHistoryResponse)]
    History {},
    /// Every `Hello` payload, in arrival order
    #[returns(HelloHistoryResponse)]
    HelloHistory {},
}

#[cw_serde]
pub struct CallbackHistoryResponse {
    pub history: Vec<CallbackMessage>,
}

#[cw_serde]
pub struct HelloHistoryResponse {
    pub history: Vec<Binary>,
}
