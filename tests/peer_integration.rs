//! Integration tests against a live Fabric peer.
//!
//! These tests submit real proposals to the peer named by `ENDPOINT` using the
//! identity in `MSP_ID`, `CLIENT_CERT` and `CLIENT_KEY` (PEM file paths).
//! Variables may also come from a `.env` file.
//! Install additionally reads the package at `CHAINCODE_PACKAGE`.
//!
//! All tests are `#[ignore]` because they require a running network.
//!
//! Run with:
//! ```bash
//! cargo test --test peer_integration -- --ignored
//! ```

use std::env;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use fabric_admin::client::AdminClient;
use fabric_admin::identity::{sign, Identity, SigningIdentity};
use fabric_admin::network::DEFAULT_PEER_ENDPOINT;
use fabric_admin::transport::{CallOptions, EndorserClient};

const TEST_TIMEOUT: Duration = Duration::from_secs(120);

fn signing_identity() -> SigningIdentity {
    let msp_id = env::var("MSP_ID").unwrap_or_else(|_| "Org1MSP".to_string());
    let cert_pem = fs::read_to_string(env::var("CLIENT_CERT").expect("CLIENT_CERT must be set"))
        .expect("read client certificate");
    let key_pem = fs::read_to_string(env::var("CLIENT_KEY").expect("CLIENT_KEY must be set"))
        .expect("read client key");

    SigningIdentity::new(Identity::from_certificate_pem(msp_id, &cert_pem))
        .with_sign(sign::ecdsa_p256_from_pem(&key_pem).expect("parse client key"))
}

async fn connected_client() -> AdminClient<SigningIdentity> {
    dotenvy::dotenv().ok();
    let endpoint = env::var("ENDPOINT").unwrap_or_else(|_| DEFAULT_PEER_ENDPOINT.to_string());
    let endorser = EndorserClient::connect(endpoint)
        .await
        .expect("connect should succeed");

    AdminClient::builder()
        .submitter(Arc::new(endorser))
        .signer(signing_identity())
        .call_options(CallOptions::new().timeout(TEST_TIMEOUT))
        .build()
        .expect("client should build")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn query_installed_succeeds() {
    let client = connected_client().await;
    let installed = client
        .lifecycle()
        .query_installed()
        .await
        .expect("query should succeed");

    for chaincode in &installed {
        assert!(!chaincode.package_id.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn install_then_query_lists_package() {
    let client = connected_client().await;
    let path = env::var("CHAINCODE_PACKAGE").unwrap_or_else(|_| "basic.tar.gz".to_string());
    let package = fs::read(path).expect("read chaincode package");

    // Re-installing an installed package may be rejected; the query below
    // still has to list it either way.
    if let Err(e) = client.lifecycle().install(package).await {
        eprintln!("install returned: {e}");
    }

    let installed = client
        .lifecycle()
        .query_installed()
        .await
        .expect("query should succeed");
    assert!(!installed.is_empty(), "expected at least one installed package");
}
