//! Network endpoint constants for the Fabric Admin SDK.

/// Default peer endpoint: a local test network peer, plaintext gRPC.
pub const DEFAULT_PEER_ENDPOINT: &str = "http://localhost:7051";
