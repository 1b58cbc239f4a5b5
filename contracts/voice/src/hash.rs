//! Deterministic proxy labels.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Label for the proxy bound to `(channel_id, sender)`.
///
/// Sender addresses are unbounded strings from another chain, so the label
/// carries a hash of the key instead of the key itself. The channel id and
/// sender are joined with a zero byte, which neither may contain.
pub fn proxy_label(channel_id: &str, sender: &str) -> String {
    let mut data = Vec::with_capacity(channel_id.len() + 1 + sender.len());
    data.extend_from_slice(channel_id.as_bytes());
    data.push(0);
    data.extend_from_slice(sender.as_bytes());

    format!("polytone-proxy-{}", hex::encode(keccak256(&data)))
}
