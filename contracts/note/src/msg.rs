//! Message types for the Polytone note.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, CosmosMsg, Empty, QueryRequest};
use polytone::CallbackRequest;

pub use crate::state::{Pair, PendingRequest};

#[cw_serde]
pub struct InstantiateMsg {
    /// Pin the connection and remote port to handshake with
    pub pair: Option<Pair>,
    /// Restrict submission to one address
    pub controller: Option<String>,
    /// Max gas of a block on this chain
    pub block_max_gas: u64,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Execute `msgs` atomically on the initiator's remote proxy.
    Execute {
        msgs: Vec<CosmosMsg<Empty>>,
        timeout_seconds: u64,
        callback: Option<CallbackRequest>,
        /// Initiator to act for; controller only
        on_behalf_of: Option<String>,
    },
    /// Run `msgs` on the remote chain. Results only come back through the
    /// callback, so one is required.
    Query {
        msgs: Vec<QueryRequest<Empty>>,
        timeout_seconds: u64,
        callback: CallbackRequest,
        on_behalf_of: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ActiveChannelResponse)]
    ActiveChannel {},
    #[returns(PairResponse)]
    Pair {},
    #[returns(BlockMaxGasResponse)]
    BlockMaxGas {},
    #[returns(ControllerResponse)]
    Controller {},
    /// Last sequence assigned on a channel (0 if none)
    #[returns(SequenceResponse)]
    Sequence { channel_id: String },
    #[returns(PendingRequestResponse)]
    PendingRequest { channel_id: String, sequence: u64 },
    /// Paginated pending requests, ordered by (channel, sequence)
    #[returns(PendingRequestsResponse)]
    PendingRequests {
        start_after: Option<(String, u64)>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ActiveChannelResponse {
    pub channel_id: Option<String>,
}

#[cw_serde]
pub struct PairResponse {
    pub pair: Option<Pair>,
}

#[cw_serde]
pub struct BlockMaxGasResponse {
    pub block_max_gas: u64,
}

#[cw_serde]
pub struct ControllerResponse {
    pub controller: Option<Addr>,
}

#[cw_serde]
pub struct SequenceResponse {
    pub sequence: u64,
}

#[cw_serde]
pub struct PendingRequestResponse {
    pub request: Option<PendingRequest>,
}

#[cw_serde]
pub struct PendingRequestEntry {
    pub channel_id: String,
    pub sequence: u64,
    pub request: PendingRequest,
}

#[cw_serde]
pub struct PendingRequestsResponse {
    pub requests: Vec<PendingRequestEntry>,
}
