use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, CosmosMsg, Empty, QueryRequest};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Execute `msgs` in order as this proxy. Owner only.
    Proxy { msgs: Vec<CosmosMsg<Empty>> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The voice allowed to drive this proxy
    #[returns(OwnerResponse)]
    Owner {},
    /// Run `msgs` independently; one result per query
    #[returns(QueryBatchResponse)]
    Query { msgs: Vec<QueryRequest<Empty>> },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct QueryBatchResponse {
    pub results: Vec<Result<Binary, String>>,
}

/// Response data of a successful `Proxy` call.
#[cw_serde]
pub struct ExecutionResponse {
    pub executed_by: String,
    /// Response data of every message, empty when a message set none
    pub results: Vec<Binary>,
}
