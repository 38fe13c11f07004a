//! Message digest functions.
//!
//! The SDK is hash-agnostic; whichever function a signing identity carries is
//! used both to derive transaction IDs and to produce signature digests.

use std::sync::Arc;

use sha2::{Sha256, Sha384};
use sha3::{Digest, Sha3_256, Sha3_384};

/// Hash function: message bytes → digest bytes.
pub type HashFn = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

/// Wrap a closure as a [`HashFn`].
pub fn from_fn<F>(f: F) -> HashFn
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// SHA-256, the default for Fabric ECDSA identities.
pub fn sha256() -> HashFn {
    from_fn(|message| Sha256::digest(message).to_vec())
}

pub fn sha384() -> HashFn {
    from_fn(|message| Sha384::digest(message).to_vec())
}

pub fn sha3_256() -> HashFn {
    from_fn(|message| Sha3_256::digest(message).to_vec())
}

pub fn sha3_384() -> HashFn {
    from_fn(|message| Sha3_384::digest(message).to_vec())
}

/// Passes the message through unchanged, for sign functions that hash
/// internally (e.g. Ed25519).
pub fn none() -> HashFn {
    from_fn(|message| message.to_vec())
}
