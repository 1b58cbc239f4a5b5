//! Message types for the Polytone voice.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use polytone::{ChannelInfo, Packet};

pub use crate::state::SenderInfo;

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the proxy contract
    pub proxy_code_id: u64,
    /// Max gas of a block on this chain
    pub block_max_gas: u64,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Run a received packet. Only callable by the voice itself, as the
    /// gas-limited sub-message of a packet receive.
    Rx { channel_id: String, packet: Packet },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BlockMaxGasResponse)]
    BlockMaxGas {},
    #[returns(ProxyCodeIdResponse)]
    ProxyCodeId {},
    /// Proxy bound to a remote sender on a local channel, if created
    #[returns(ProxyResponse)]
    Proxy { channel_id: String, sender: String },
    /// The remote sender a proxy acts for
    #[returns(SenderInfo)]
    SenderInfoForProxy { proxy: String },
    /// Handshake state of a channel
    #[returns(ChannelResponse)]
    Channel { channel_id: String },
}

#[cw_serde]
pub struct BlockMaxGasResponse {
    pub block_max_gas: u64,
}

#[cw_serde]
pub struct ProxyCodeIdResponse {
    pub proxy_code_id: u64,
}

#[cw_serde]
pub struct ProxyResponse {
    pub proxy: Option<Addr>,
}

#[cw_serde]
pub struct ChannelResponse {
    pub channel: Option<ChannelInfo>,
}
