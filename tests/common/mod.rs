//! Shared fixtures for lifecycle command tests: a recording stub submitter and
//! a signing identity with a deterministic sign function.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use prost::Message;

use fabric_admin::error::TransportError;
use fabric_admin::identity::{sign, Identity, SigningIdentity};
use fabric_admin::protos::common::{ChannelHeader, Header};
use fabric_admin::protos::peer::{
    self, ChaincodeInvocationSpec, ChaincodeProposalPayload, ProposalResponse, Response,
    SignedProposal,
};
use fabric_admin::transport::{CallOptions, ProposalSubmitter};

pub const SIGNATURE: &[u8] = b"SIGN";

pub fn signing_identity() -> SigningIdentity {
    SigningIdentity::new(Identity::new("Org1MSP", b"CREDENTIALS".to_vec()))
        .with_sign(sign::from_fn(|_digest| Ok(SIGNATURE.to_vec())))
}

enum Reply {
    Response(ProposalResponse),
    Error(String),
}

/// Records every submitted proposal and answers with a canned reply.
pub struct StubSubmitter {
    calls: Mutex<Vec<(SignedProposal, CallOptions)>>,
    reply: Reply,
}

impl StubSubmitter {
    pub fn responding(status: i32, message: &str, payload: Vec<u8>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Response(ProposalResponse {
                response: Some(Response {
                    status,
                    message: message.to_string(),
                    payload,
                }),
                ..Default::default()
            }),
        })
    }

    pub fn succeeding() -> Arc<Self> {
        Self::responding(200, "", Vec::new())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Error(message.to_string()),
        })
    }

    pub fn calls(&self) -> Vec<(SignedProposal, CallOptions)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProposalSubmitter for StubSubmitter {
    async fn process_proposal(
        &self,
        signed_proposal: SignedProposal,
        options: &CallOptions,
    ) -> Result<ProposalResponse, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((signed_proposal, options.clone()));
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Error(message) => Err(TransportError::Other(message.clone())),
        }
    }
}

/// Decode the channel header and chaincode arguments carried by a submitted proposal.
pub fn decode_submitted(signed: &SignedProposal) -> (ChannelHeader, Vec<Vec<u8>>) {
    let proposal = peer::Proposal::decode(signed.proposal_bytes.as_slice()).unwrap();

    let header = Header::decode(proposal.header.as_slice()).unwrap();
    let channel_header = ChannelHeader::decode(header.channel_header.as_slice()).unwrap();

    let payload = ChaincodeProposalPayload::decode(proposal.payload.as_slice()).unwrap();
    let spec = ChaincodeInvocationSpec::decode(payload.input.as_slice()).unwrap();
    let args = spec.chaincode_spec.unwrap().input.unwrap().args;

    (channel_header, args)
}
