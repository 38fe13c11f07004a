//! Lifecycle sub-client: chaincode lifecycle commands bound to an `AdminClient`.

use std::io::Read;

use crate::client::AdminClient;
use crate::error::AdminResult;
use crate::identity::ProposalSigner;
use crate::lifecycle::install::{install, with_chaincode_package, with_chaincode_package_bytes};
use crate::lifecycle::query_installed::{query_installed, InstalledChaincode};
use crate::lifecycle::InstallOption;

/// Sub-client for `_lifecycle` operations.
pub struct Lifecycle<'a, S> {
    pub(crate) client: &'a AdminClient<S>,
}

impl<'a, S: ProposalSigner> Lifecycle<'a, S> {
    pub async fn install(&self, package: impl Into<Vec<u8>>) -> AdminResult<()> {
        let options = self.install_options(with_chaincode_package_bytes(package));
        install(self.client.signer.as_ref(), options).await
    }

    /// Install a package read from `reader`, e.g. an opened `.tar.gz` file.
    pub async fn install_from_reader(&self, reader: impl Read + Send + 'static) -> AdminResult<()> {
        let options = self.install_options(with_chaincode_package(reader));
        install(self.client.signer.as_ref(), options).await
    }

    pub async fn query_installed(&self) -> AdminResult<Vec<InstalledChaincode>> {
        query_installed(self.client.signer.as_ref(), self.client.command_options()).await
    }

    fn install_options(&self, package: InstallOption) -> Vec<InstallOption> {
        self.client
            .command_options()
            .into_iter()
            .map(InstallOption::from)
            .chain(std::iter::once(package))
            .collect()
    }
}
