//! Chaincode lifecycle commands: operations on the `_lifecycle` system chaincode.
//!
//! Every command follows the same path:
//!
//! 1. **Configure**: fold the caller's options onto a config value, stopping at
//!    the first option that fails ([`options::apply_options`]).
//! 2. **Validate**: reject missing inputs before any signing or network I/O.
//! 3. **Run**: build the proposal, sign it, submit it through the configured
//!    [`ProposalSubmitter`], check the response status and decode the result.
//!
//! Nothing is retried. Transport errors surface unchanged and peer rejections
//! surface as [`AdminError::ProposalRejected`].

pub mod client;
pub mod install;
pub mod options;
pub mod query_installed;

use std::sync::Arc;

use crate::error::{AdminError, AdminResult};
use crate::identity::ProposalSigner;
use crate::proposal::{check_successful, ProposalBuilder};
use crate::protos::peer::ProposalResponse;
use crate::transport::{CallOptions, ProposalSubmitter};

pub use install::{install, InstallOption};
pub use options::{apply_options, CommandOption, ConfigOption};
pub use query_installed::{query_installed, ChaincodeReference, InstalledChaincode};

/// Name of the lifecycle system chaincode.
pub const LIFECYCLE_CHAINCODE_NAME: &str = "_lifecycle";

/// Lifecycle function that installs a chaincode package on the peer.
pub const INSTALL_TRANSACTION_NAME: &str = "InstallChaincode";

/// Lifecycle function that lists the packages installed on the peer.
pub const QUERY_INSTALLED_TRANSACTION_NAME: &str = "QueryInstalledChaincodes";

/// A validated command, ready to run.
pub(crate) struct ReadyCommand {
    submitter: Arc<dyn ProposalSubmitter>,
    call_options: CallOptions,
    channel_name: String,
}

impl ReadyCommand {
    /// Build, sign and submit a `_lifecycle` proposal carrying a single
    /// serialized argument message, returning the response once its status
    /// has been checked.
    pub(crate) async fn submit<S: ProposalSigner>(
        &self,
        signer: &S,
        transaction_name: &str,
        args: Vec<u8>,
    ) -> AdminResult<ProposalResponse> {
        let proposal = ProposalBuilder::new(LIFECYCLE_CHAINCODE_NAME, transaction_name)
            .channel(self.channel_name.as_str())
            .bytes_arguments([args])
            .build(signer)?;
        let tx_id = proposal.transaction_id().to_string();
        let signed_proposal = proposal.sign(signer)?;

        tracing::debug!(tx_id = %tx_id, function = transaction_name, "Submitting proposal");
        let response = self
            .submitter
            .process_proposal(signed_proposal, &self.call_options)
            .await?;

        if let Err(rejection) = check_successful(&response) {
            tracing::warn!(
                tx_id = %tx_id,
                status = rejection.code,
                "Proposal rejected: {}",
                rejection.message
            );
            return Err(AdminError::ProposalRejected(rejection));
        }

        Ok(response)
    }
}
