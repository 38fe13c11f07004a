//! Proposal construction, signing and response validation.

pub mod builder;
pub mod context;
pub mod response;

use crate::error::AdminResult;
use crate::identity::ProposalSigner;
use crate::protos::peer::{self, SignedProposal};

pub use builder::ProposalBuilder;
pub use context::{TransactionContext, NONCE_LENGTH};
pub use response::check_successful;

/// An unsigned, fully assembled proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    transaction_id: String,
    message: peer::Proposal,
}

impl Proposal {
    pub(crate) fn new(transaction_id: String, message: peer::Proposal) -> Self {
        Self {
            transaction_id,
            message,
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn message(&self) -> &peer::Proposal {
        &self.message
    }

    /// Serialize and sign, consuming the proposal.
    ///
    /// The signed proposal carries exactly the bytes the signature was computed
    /// over.
    pub fn sign<S: ProposalSigner>(self, signer: &S) -> AdminResult<SignedProposal> {
        let signed = signer.sign_message(&self.message)?;
        Ok(SignedProposal {
            proposal_bytes: signed.bytes,
            signature: signed.signature,
        })
    }
}
