//! Endorser gRPC client: `EndorserClient` over a `tonic` channel.
//!
//! Speaks the `protos.Endorser/ProcessProposal` unary RPC directly with the
//! prost codec, so no generated service stubs are needed.

use async_trait::async_trait;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::{AsciiMetadataKey, AsciiMetadataValue};
use tonic::transport::{Channel, Endpoint};

use crate::error::TransportError;
use crate::protos::peer::{ProposalResponse, SignedProposal};
use crate::transport::{CallOptions, ProposalSubmitter};

const PROCESS_PROPOSAL_PATH: &str = "/protos.Endorser/ProcessProposal";

/// gRPC endorser client. Cheap to clone; clones share the underlying channel,
/// which should be shared by all commands talking to the same peer.
#[derive(Debug, Clone)]
pub struct EndorserClient {
    inner: Grpc<Channel>,
}

impl EndorserClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }

    /// Connect to a peer endpoint such as `http://localhost:7051`.
    ///
    /// Plaintext only; for TLS build the `Channel` yourself and use [`new`](Self::new).
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        let endpoint = endpoint.into();
        tracing::debug!("Connecting to peer at {}", endpoint);
        let channel = Endpoint::from_shared(endpoint)?.connect().await?;
        Ok(Self::new(channel))
    }

    fn request(
        signed_proposal: SignedProposal,
        options: &CallOptions,
    ) -> Result<tonic::Request<SignedProposal>, TransportError> {
        let mut request = tonic::Request::new(signed_proposal);
        if let Some(timeout) = options.timeout {
            request.set_timeout(timeout);
        }
        for (key, value) in &options.metadata {
            let key: AsciiMetadataKey = key
                .parse()
                .map_err(|_| TransportError::InvalidMetadata(format!("key {key:?}")))?;
            let value: AsciiMetadataValue = value.parse().map_err(|_| {
                TransportError::InvalidMetadata(format!("value for {}", key.as_str()))
            })?;
            request.metadata_mut().append(key, value);
        }
        Ok(request)
    }
}

#[async_trait]
impl ProposalSubmitter for EndorserClient {
    async fn process_proposal(
        &self,
        signed_proposal: SignedProposal,
        options: &CallOptions,
    ) -> Result<ProposalResponse, TransportError> {
        let request = Self::request(signed_proposal, options)?;

        let mut grpc = self.inner.clone();
        grpc.ready().await?;

        let codec: ProstCodec<SignedProposal, ProposalResponse> = ProstCodec::default();
        let response = grpc
            .unary(request, PathAndQuery::from_static(PROCESS_PROPOSAL_PATH), codec)
            .await?;
        Ok(response.into_inner())
    }
}
