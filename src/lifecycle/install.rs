//! `InstallChaincode`: install a chaincode package on the target peer.

use std::io::Read;

use prost::Message;

use crate::error::{AdminError, AdminResult};
use crate::identity::ProposalSigner;
use crate::lifecycle::options::{apply_options, CommandConfig, CommandOption, ConfigOption};
use crate::lifecycle::{ReadyCommand, INSTALL_TRANSACTION_NAME};
use crate::protos;
use crate::protos::lifecycle::{InstallChaincodeArgs, InstallChaincodeResult};

#[derive(Clone, Default)]
pub struct InstallConfig {
    command: CommandConfig,
    chaincode_package: Option<Vec<u8>>,
}

impl InstallConfig {
    fn validate(self) -> AdminResult<(ReadyCommand, Vec<u8>)> {
        let command = self.command.validate()?;
        let package = self
            .chaincode_package
            .ok_or_else(|| AdminError::Configuration("no chaincode package supplied".into()))?;
        Ok((command, package))
    }
}

/// Options accepted by [`install`].
pub enum InstallOption {
    Command(CommandOption),
    /// Package content, taken as is.
    ChaincodePackage(Vec<u8>),
    /// Package content, read to the end when the option is applied.
    ChaincodePackageReader(Box<dyn Read + Send>),
}

impl From<CommandOption> for InstallOption {
    fn from(option: CommandOption) -> Self {
        Self::Command(option)
    }
}

impl ConfigOption<InstallConfig> for InstallOption {
    fn apply(self, mut config: InstallConfig) -> AdminResult<InstallConfig> {
        match self {
            Self::Command(option) => config.command = option.apply(config.command)?,
            Self::ChaincodePackage(bytes) => config.chaincode_package = Some(bytes),
            Self::ChaincodePackageReader(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                config.chaincode_package = Some(bytes);
            }
        }
        Ok(config)
    }
}

impl std::fmt::Debug for InstallOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(option) => f.debug_tuple("Command").field(option).finish(),
            Self::ChaincodePackage(bytes) => write!(f, "ChaincodePackage({} bytes)", bytes.len()),
            Self::ChaincodePackageReader(_) => f.write_str("ChaincodePackageReader(..)"),
        }
    }
}

pub fn with_chaincode_package_bytes(package: impl Into<Vec<u8>>) -> InstallOption {
    InstallOption::ChaincodePackage(package.into())
}

pub fn with_chaincode_package(reader: impl Read + Send + 'static) -> InstallOption {
    InstallOption::ChaincodePackageReader(Box::new(reader))
}

/// Install a chaincode package on the peer behind the configured submitter.
///
/// Requires a submitter and a chaincode package. Fails without touching the
/// network if either is missing.
///
/// # Example
///
/// ```rust,ignore
/// install(
///     &signing_id,
///     [
///         with_submitter(Arc::new(endorser)).into(),
///         with_chaincode_package(File::open("basic.tar.gz")?),
///     ],
/// )
/// .await?;
/// ```
pub async fn install<S, I>(signer: &S, options: I) -> AdminResult<()>
where
    S: ProposalSigner,
    I: IntoIterator<Item = InstallOption>,
{
    let (command, package) = apply_options(InstallConfig::default(), options)?.validate()?;
    let package_len = package.len();

    let args = protos::encode(&InstallChaincodeArgs {
        chaincode_install_package: package,
    })?;
    let response = command.submit(signer, INSTALL_TRANSACTION_NAME, args).await?;

    match InstallChaincodeResult::decode(response.response_payload()) {
        Ok(result) if !result.package_id.is_empty() => tracing::info!(
            package_id = %result.package_id,
            label = %result.label,
            "Installed chaincode package"
        ),
        _ => tracing::info!(package_bytes = package_len, "Installed chaincode package"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::options::with_channel;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_reader_option_reads_whole_package() {
        let config = apply_options(
            InstallConfig::default(),
            [with_chaincode_package(std::io::Cursor::new(b"PACKAGE".to_vec()))],
        )
        .unwrap();
        assert_eq!(config.chaincode_package.as_deref(), Some(&b"PACKAGE"[..]));
    }

    #[test]
    fn test_reader_failure_aborts_configuration() {
        let err = apply_options(
            InstallConfig::default(),
            [
                with_chaincode_package(FailingReader),
                with_chaincode_package_bytes(b"NEVER".to_vec()),
            ],
        )
        .err()
        .unwrap();
        assert!(matches!(err, AdminError::Io(_)));
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn test_command_options_reach_shared_config() {
        let config = apply_options(
            InstallConfig::default(),
            [InstallOption::from(with_channel("mychannel"))],
        )
        .unwrap();
        assert_eq!(config.command.channel_name.as_deref(), Some("mychannel"));
    }

    #[test]
    fn test_later_package_replaces_earlier() {
        let config = apply_options(
            InstallConfig::default(),
            [
                with_chaincode_package_bytes(b"FIRST".to_vec()),
                with_chaincode_package_bytes(b"SECOND".to_vec()),
            ],
        )
        .unwrap();
        assert_eq!(config.chaincode_package.as_deref(), Some(&b"SECOND"[..]));
    }
}
