//! Per-proposal transaction context: transaction ID and signature header.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{AdminResult, IdentityError};
use crate::identity::ProposalSigner;
use crate::protos::common::SignatureHeader;

/// Length of the random nonce carried in every signature header.
pub const NONCE_LENGTH: usize = 24;

/// Transaction ID plus the signature header it was derived from.
///
/// A context belongs to exactly one proposal. The peer recomputes the ID as
/// `hex(hash(nonce ‖ creator))` from the signature header, so the two fields
/// must stay together and must never be reused for a second proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionContext {
    transaction_id: String,
    signature_header: SignatureHeader,
}

impl TransactionContext {
    /// Create a context with a fresh nonce from the operating system RNG.
    pub fn new<S: ProposalSigner>(signer: &S) -> AdminResult<Self> {
        let mut nonce = [0u8; NONCE_LENGTH];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| IdentityError::Randomness(e.to_string()))?;

        Self::from_nonce(signer, nonce)
    }

    /// Create a context from a caller-chosen nonce. Only deterministic tests
    /// should need this.
    pub fn from_nonce<S: ProposalSigner>(signer: &S, nonce: [u8; NONCE_LENGTH]) -> AdminResult<Self> {
        let creator = signer.creator()?;

        let mut salted_creator = Vec::with_capacity(NONCE_LENGTH + creator.len());
        salted_creator.extend_from_slice(&nonce);
        salted_creator.extend_from_slice(&creator);
        let transaction_id = hex::encode(signer.hash(&salted_creator));

        Ok(Self {
            transaction_id,
            signature_header: SignatureHeader {
                creator,
                nonce: nonce.to_vec(),
            },
        })
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn signature_header(&self) -> &SignatureHeader {
        &self.signature_header
    }

    pub(crate) fn into_parts(self) -> (String, SignatureHeader) {
        (self.transaction_id, self.signature_header)
    }
}
