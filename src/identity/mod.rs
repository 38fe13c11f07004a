//! Signing identity: creator serialization, hashing and signing.
//!
//! ## Capability model
//!
//! Proposal construction needs three things from an identity, each behind its
//! own trait so production and test doubles are interchangeable:
//!
//! - [`Creator`]: the serialized `SerializedIdentity` placed in signature headers
//! - [`Hasher`]: message digest used for both transaction IDs and signatures
//! - [`Signer`]: signs a digest
//!
//! Anything implementing all three (plus `Send + Sync`) is a [`ProposalSigner`].
//! [`SigningIdentity`] is the stock implementation built from an [`Identity`]
//! and pluggable [`HashFn`] / [`SignFn`] functions.
//!
//! Implementations must be safe for concurrent use: one signer is typically
//! shared by every command issued in an admin session.

pub mod hash;
pub mod sign;

use std::sync::Arc;

use prost::Message;

use crate::error::{AdminResult, IdentityError};
use crate::protos;
use crate::protos::msp::SerializedIdentity;

pub use hash::HashFn;
pub use sign::SignFn;

// ============================================================================
// Identity
// ============================================================================

/// Client identity: the MSP the identity belongs to and its credentials
/// (a PEM-encoded X.509 certificate for standard Fabric MSPs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    msp_id: String,
    credentials: Vec<u8>,
}

impl Identity {
    pub fn new(msp_id: impl Into<String>, credentials: impl Into<Vec<u8>>) -> Self {
        Self {
            msp_id: msp_id.into(),
            credentials: credentials.into(),
        }
    }

    /// Identity backed by a PEM-encoded certificate. Fabric MSPs expect the
    /// PEM text itself as credentials, not the DER body.
    pub fn from_certificate_pem(msp_id: impl Into<String>, certificate_pem: &str) -> Self {
        Self::new(msp_id, certificate_pem.as_bytes())
    }

    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    pub fn credentials(&self) -> &[u8] {
        &self.credentials
    }
}

// ============================================================================
// Capabilities
// ============================================================================

pub trait Creator {
    /// Serialized identity bytes identifying the proposal creator.
    fn creator(&self) -> AdminResult<Vec<u8>>;
}

pub trait Hasher {
    fn hash(&self, message: &[u8]) -> Vec<u8>;
}

pub trait Signer {
    fn sign(&self, digest: &[u8]) -> Result<Vec<u8>, IdentityError>;
}

impl<T: Creator + ?Sized> Creator for Arc<T> {
    fn creator(&self) -> AdminResult<Vec<u8>> {
        (**self).creator()
    }
}

impl<T: Hasher + ?Sized> Hasher for Arc<T> {
    fn hash(&self, message: &[u8]) -> Vec<u8> {
        (**self).hash(message)
    }
}

impl<T: Signer + ?Sized> Signer for Arc<T> {
    fn sign(&self, digest: &[u8]) -> Result<Vec<u8>, IdentityError> {
        (**self).sign(digest)
    }
}

/// Signature together with the exact bytes it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    pub signature: Vec<u8>,
    pub bytes: Vec<u8>,
}

/// Everything needed to originate a signed proposal.
pub trait ProposalSigner: Creator + Hasher + Signer + Send + Sync {
    /// Serialize `message`, hash the serialized bytes and sign the digest.
    ///
    /// The returned `bytes` are the ones that were hashed; transmit them as-is
    /// rather than serializing `message` again.
    fn sign_message<M: Message>(&self, message: &M) -> AdminResult<SignedMessage>
    where
        Self: Sized,
    {
        let bytes = protos::encode(message)?;
        let digest = self.hash(&bytes);
        let signature = self.sign(&digest)?;
        Ok(SignedMessage { signature, bytes })
    }
}

impl<T: Creator + Hasher + Signer + Send + Sync> ProposalSigner for T {}

// ============================================================================
// SigningIdentity
// ============================================================================

/// Identity paired with a hash function and a sign function.
///
/// Defaults to SHA-256 hashing and a sign function that always fails, so an
/// identity without signing material is rejected at sign time rather than
/// producing unsigned proposals.
#[derive(Clone)]
pub struct SigningIdentity {
    identity: Identity,
    hash: HashFn,
    sign: SignFn,
}

impl SigningIdentity {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            hash: hash::sha256(),
            sign: sign::unsupported(),
        }
    }

    pub fn with_hash(mut self, hash: HashFn) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_sign(mut self, sign: SignFn) -> Self {
        self.sign = sign;
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl std::fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl Creator for SigningIdentity {
    fn creator(&self) -> AdminResult<Vec<u8>> {
        protos::encode(&SerializedIdentity {
            mspid: self.identity.msp_id.clone(),
            id_bytes: self.identity.credentials.clone(),
        })
    }
}

impl Hasher for SigningIdentity {
    fn hash(&self, message: &[u8]) -> Vec<u8> {
        (self.hash)(message)
    }
}

impl Signer for SigningIdentity {
    fn sign(&self, digest: &[u8]) -> Result<Vec<u8>, IdentityError> {
        (self.sign)(digest)
    }
}
