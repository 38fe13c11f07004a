//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Missing or invalid command input, detected before any signing or network call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] prost::EncodeError),

    #[error("Failed to read chaincode package: {0}")]
    Io(#[from] std::io::Error),

    /// Transport failures are passed through verbatim.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Proposal rejected: {0}")]
    ProposalRejected(#[from] UnsuccessfulResponse),

    #[error("Failed to deserialize {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: prost::DecodeError,
    },
}

/// Signing identity errors.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Secure randomness unavailable: {0}")]
    Randomness(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Invalid private key: {0}")]
    Key(String),
}

/// Errors raised by a proposal submitter.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "grpc")]
    #[error("{0}")]
    Status(#[from] tonic::Status),

    #[cfg(feature = "grpc")]
    #[error("Connection failed: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("Invalid call metadata: {0}")]
    InvalidMetadata(String),

    #[error("{0}")]
    Other(String),
}

/// A peer response whose status falls outside the success range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsuccessful response received with status {code} ({name}): {message}")]
pub struct UnsuccessfulResponse {
    pub code: i32,
    pub name: &'static str,
    pub message: String,
}

/// Result type alias for SDK operations.
pub type AdminResult<T> = Result<T, AdminError>;
