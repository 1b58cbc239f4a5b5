use cosmwasm_std::StdError;
use polytone::PolytoneError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Polytone(#[from] PolytoneError),

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },
}
