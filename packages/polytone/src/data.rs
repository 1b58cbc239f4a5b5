//! Response data of wasm execute sub-messages.
//!
//! Hosts hand the data of a `WasmMsg::Execute` sub-message back wrapped in a
//! protobuf `MsgExecuteContractResponse`.

use cosmwasm_std::Binary;
use cw_utils::parse_execute_response_data;

use crate::error::PolytoneError;

/// The data the executed contract set, or empty if it set none.
pub fn execute_response_data(data: Option<Binary>) -> Result<Binary, PolytoneError> {
    let Some(data) = data else {
        return Ok(Binary::default());
    };
    let response =
        parse_execute_response_data(data.as_slice()).map_err(|err| PolytoneError::Decode {
            reason: format!("execute response data: {}", err),
        })?;
    Ok(response.data.unwrap_or_default())
}
