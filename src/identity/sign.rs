//! Sign functions.
//!
//! A sign function receives a message digest (already hashed by the identity's
//! [`HashFn`](super::HashFn)) and returns signature bytes.

use std::sync::Arc;

use p256::ecdsa::signature::hazmat::PrehashSigner;
use p256::ecdsa::{Signature, SigningKey};
use p256::pkcs8::DecodePrivateKey;
use p256::SecretKey;

use crate::error::IdentityError;

/// Sign function: digest bytes → signature bytes.
pub type SignFn = Arc<dyn Fn(&[u8]) -> Result<Vec<u8>, IdentityError> + Send + Sync>;

/// Wrap a closure as a [`SignFn`].
pub fn from_fn<F>(f: F) -> SignFn
where
    F: Fn(&[u8]) -> Result<Vec<u8>, IdentityError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Placeholder used until real signing material is supplied. Always fails.
pub fn unsupported() -> SignFn {
    from_fn(|_| {
        Err(IdentityError::Signing(
            "no sign implementation supplied".to_string(),
        ))
    })
}

/// ECDSA P-256 signing with the given key.
///
/// Signatures are DER-encoded with a low-S value; Fabric peers reject high-S
/// signatures.
pub fn ecdsa_p256(signing_key: SigningKey) -> SignFn {
    from_fn(move |digest| {
        let signature: Signature = signing_key
            .sign_prehash(digest)
            .map_err(|e| IdentityError::Signing(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);
        Ok(signature.to_der().as_bytes().to_vec())
    })
}

/// Parse a P-256 private key from PEM, accepting both PKCS#8 (`PRIVATE KEY`,
/// as written by Fabric CAs and `cryptogen`) and SEC1 (`EC PRIVATE KEY`).
pub fn p256_key_from_pem(pem: &str) -> Result<SigningKey, IdentityError> {
    if let Ok(key) = SigningKey::from_pkcs8_pem(pem) {
        return Ok(key);
    }
    let secret = SecretKey::from_sec1_pem(pem).map_err(|e| IdentityError::Key(e.to_string()))?;
    Ok(SigningKey::from(secret))
}

/// Convenience: [`ecdsa_p256`] over a key parsed with [`p256_key_from_pem`].
pub fn ecdsa_p256_from_pem(pem: &str) -> Result<SignFn, IdentityError> {
    Ok(ecdsa_p256(p256_key_from_pem(pem)?))
}
