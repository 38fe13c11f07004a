//! # Fabric Admin SDK
//!
//! Administrative commands for Hyperledger Fabric peers: install chaincode
//! packages and query what is installed, through the `_lifecycle` system
//! chaincode.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Protobuf wire messages, identity, hashing and signing (always available)
//! 2. **Proposal**: Transaction context, proposal builder, response status checks
//! 3. **Transport**: `ProposalSubmitter` seam; `EndorserClient` over gRPC (`grpc` feature)
//! 4. **Lifecycle**: Option-configured commands: `install`, `query_installed`
//! 5. **High-Level Client**: `AdminClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fabric_admin::prelude::*;
//!
//! let endorser = EndorserClient::connect("http://localhost:7051").await?;
//! let signing_id = SigningIdentity::new(Identity::from_certificate_pem("Org1MSP", &cert_pem))
//!     .with_sign(sign::ecdsa_p256_from_pem(&key_pem)?);
//!
//! let client = AdminClient::builder()
//!     .submitter(Arc::new(endorser))
//!     .signer(signing_id)
//!     .build()?;
//!
//! client.lifecycle().install(package_bytes).await?;
//! let installed = client.lifecycle().query_installed().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network endpoint constants.
pub mod network;

/// Hand-declared protobuf messages for the peer wire protocol.
pub mod protos;

/// Client identity, hash and sign implementations.
pub mod identity;

// ── Layer 2: Proposal ────────────────────────────────────────────────────────

/// Proposal construction, signing and response validation.
pub mod proposal;

// ── Layer 3: Transport ───────────────────────────────────────────────────────

/// Proposal submission seam and the gRPC endorser client.
pub mod transport;

// ── Layer 4: Lifecycle ───────────────────────────────────────────────────────

/// Chaincode lifecycle commands.
pub mod lifecycle;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `AdminClient`, the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{AdminError, AdminResult, TransportError, UnsuccessfulResponse};

    // Identity
    pub use crate::identity::{
        hash, sign, Creator, Hasher, Identity, ProposalSigner, Signer, SigningIdentity,
    };

    // Proposal
    pub use crate::proposal::{Proposal, ProposalBuilder, TransactionContext};

    // Transport
    pub use crate::transport::{CallOptions, ProposalSubmitter};
    #[cfg(feature = "grpc")]
    pub use crate::transport::EndorserClient;

    // Lifecycle
    pub use crate::lifecycle::install::{with_chaincode_package, with_chaincode_package_bytes};
    pub use crate::lifecycle::options::{with_call_options, with_channel, with_submitter};
    pub use crate::lifecycle::{
        install, query_installed, ChaincodeReference, CommandOption, InstallOption,
        InstalledChaincode,
    };

    // Client
    pub use crate::client::{AdminClient, AdminClientBuilder, LifecycleClient};

    pub use std::sync::Arc;
}
