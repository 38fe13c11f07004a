//! Install a chaincode package on a peer, then list the installed packages.
//!
//! Configuration comes from the environment (or a `.env` file):
//!
//! | Variable            | Default                   |
//! |---------------------|---------------------------|
//! | `ENDPOINT`          | `http://localhost:7051`   |
//! | `MSP_ID`            | `Org1MSP`                 |
//! | `CLIENT_CERT`       | (required) PEM certificate path |
//! | `CLIENT_KEY`        | (required) PEM private key path |
//! | `CHAINCODE_PACKAGE` | `basic.tar.gz`            |
//!
//! Run with:
//! ```bash
//! RUST_LOG=fabric_admin=debug cargo run --example admin
//! ```

use std::env;
use std::fs::{self, File};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use fabric_admin::network::DEFAULT_PEER_ENDPOINT;
use fabric_admin::prelude::*;

const INSTALL_TIMEOUT: Duration = Duration::from_secs(120);
const QUERY_TIMEOUT: Duration = Duration::from_secs(30);

fn required_env(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    env::var(name).map_err(|_| format!("{name} must be set").into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let endpoint = env::var("ENDPOINT").unwrap_or_else(|_| DEFAULT_PEER_ENDPOINT.to_string());
    let msp_id = env::var("MSP_ID").unwrap_or_else(|_| "Org1MSP".to_string());
    let package_path =
        env::var("CHAINCODE_PACKAGE").unwrap_or_else(|_| "basic.tar.gz".to_string());

    let cert_pem = fs::read_to_string(required_env("CLIENT_CERT")?)?;
    let key_pem = fs::read_to_string(required_env("CLIENT_KEY")?)?;

    let signing_id = SigningIdentity::new(Identity::from_certificate_pem(msp_id, &cert_pem))
        .with_sign(sign::ecdsa_p256_from_pem(&key_pem)?);

    let endorser: Arc<dyn ProposalSubmitter> = Arc::new(EndorserClient::connect(endpoint).await?);

    // Install
    let result = install(
        &signing_id,
        [
            InstallOption::from(with_submitter(endorser.clone())),
            InstallOption::from(with_call_options(CallOptions::new().timeout(INSTALL_TIMEOUT))),
            with_chaincode_package(File::open(&package_path)?),
        ],
    )
    .await;
    if let Err(e) = result {
        println!("Install failed: {e}");
    }

    // Query installed
    let installed = query_installed(
        &signing_id,
        [
            with_submitter(endorser),
            with_call_options(CallOptions::new().timeout(QUERY_TIMEOUT)),
        ],
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&installed)?);
    Ok(())
}
