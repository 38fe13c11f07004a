//! Transport layer: the [`ProposalSubmitter`] boundary and per-call options.
//!
//! The SDK never opens connections itself. Callers hand commands a submitter
//! bound to a peer; with the `grpc` feature, [`EndorserClient`] is the stock
//! implementation over a `tonic` channel.

pub mod options;

#[cfg(feature = "grpc")]
pub mod grpc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::protos::peer::{ProposalResponse, SignedProposal};

pub use options::CallOptions;

#[cfg(feature = "grpc")]
pub use grpc::EndorserClient;

/// Sends a signed proposal to an endorsing peer and returns its response.
///
/// Implementations must honour `options.timeout` and be safe to share across
/// concurrently running commands; the SDK holds submitters behind `Arc` and
/// performs no locking of its own.
#[async_trait]
pub trait ProposalSubmitter: Send + Sync {
    async fn process_proposal(
        &self,
        signed_proposal: SignedProposal,
        options: &CallOptions,
    ) -> Result<ProposalResponse, TransportError>;
}
