//! Capability checks at contract boundaries.
//!
//! Any contract may be named as a proxy owner or as a callback receiver, so
//! authorization is an identity comparison against the address that holds
//! the capability, never an inspection of the caller's type.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::error::PolytoneError;

#[cw_serde]
pub enum Capability {
    /// The only address allowed to drive a proxy (the voice that created it).
    ProxyOwner(Addr),
    /// A callback receiver that only accepts deliveries from this note.
    CallbackReceiver(Addr),
}

impl Capability {
    pub fn holder(&self) -> &Addr {
        match self {
            Capability::ProxyOwner(addr) | Capability::CallbackReceiver(addr) => addr,
        }
    }

    fn role(&self) -> &'static str {
        match self {
            Capability::ProxyOwner(_) => "proxy owner",
            Capability::CallbackReceiver(_) => "callback source",
        }
    }

    pub fn ensure(&self, sender: &Addr) -> Result<(), PolytoneError> {
        if sender == self.holder() {
            Ok(())
        } else {
            Err(PolytoneError::Unauthorized {
                role: self.role().to_string(),
                expected: self.holder().to_string(),
                sender: sender.to_string(),
            })
        }
    }
}
