//! Fabric protobuf wire types.
//!
//! Hand-declared `prost` messages covering the subset of `fabric-protos` that
//! proposal construction and the lifecycle system chaincode need. Field
//! numbers match the upstream `.proto` definitions exactly, so these encode
//! byte-for-byte like the generated bindings of other Fabric SDKs.

pub mod common;
pub mod lifecycle;
pub mod msp;
pub mod peer;

use prost::Message;

use crate::error::AdminResult;

/// Serialize a message into a freshly sized buffer.
pub fn encode<M: Message>(message: &M) -> AdminResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf)
}
