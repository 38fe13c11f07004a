//! `QueryInstalledChaincodes`: list the chaincode packages installed on the peer.

use std::collections::BTreeMap;

use prost::Message;
use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};
use crate::identity::ProposalSigner;
use crate::lifecycle::options::{apply_options, CommandConfig, CommandOption};
use crate::lifecycle::QUERY_INSTALLED_TRANSACTION_NAME;
use crate::protos;
use crate::protos::lifecycle::{self as wire, QueryInstalledChaincodesArgs};

/// A chaincode package installed on the peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledChaincode {
    pub package_id: String,
    pub label: String,
    /// Channel name → chaincode definitions on that channel using this package.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub references: BTreeMap<String, Vec<ChaincodeReference>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeReference {
    pub name: String,
    pub version: String,
}

impl From<wire::Chaincode> for ChaincodeReference {
    fn from(chaincode: wire::Chaincode) -> Self {
        Self {
            name: chaincode.name,
            version: chaincode.version,
        }
    }
}

impl From<wire::InstalledChaincode> for InstalledChaincode {
    fn from(installed: wire::InstalledChaincode) -> Self {
        Self {
            package_id: installed.package_id,
            label: installed.label,
            references: installed
                .references
                .into_iter()
                .map(|(channel, refs)| {
                    let chaincodes = refs.chaincodes.into_iter().map(Into::into).collect();
                    (channel, chaincodes)
                })
                .collect(),
        }
    }
}

/// Query the chaincode packages installed on the peer behind the configured
/// submitter. Requires a submitter.
pub async fn query_installed<S, I>(signer: &S, options: I) -> AdminResult<Vec<InstalledChaincode>>
where
    S: ProposalSigner,
    I: IntoIterator<Item = CommandOption>,
{
    let command = apply_options(CommandConfig::default(), options)?.validate()?;

    let args = protos::encode(&QueryInstalledChaincodesArgs {})?;
    let response = command
        .submit(signer, QUERY_INSTALLED_TRANSACTION_NAME, args)
        .await?;

    let result = wire::QueryInstalledChaincodesResult::decode(response.response_payload())
        .map_err(|source| AdminError::Decode {
            context: "query installed chaincode result",
            source,
        })?;

    tracing::info!(count = result.installed_chaincodes.len(), "Queried installed chaincodes");
    Ok(result
        .installed_chaincodes
        .into_iter()
        .map(Into::into)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_references_grouped_by_channel() {
        let installed = wire::InstalledChaincode {
            package_id: "basic_1.0:abc".to_string(),
            label: "basic_1.0".to_string(),
            references: HashMap::from([(
                "mychannel".to_string(),
                wire::References {
                    chaincodes: vec![wire::Chaincode {
                        name: "basic".to_string(),
                        version: "1.0".to_string(),
                    }],
                },
            )]),
        };

        let domain = InstalledChaincode::from(installed);
        assert_eq!(domain.package_id, "basic_1.0:abc");
        assert_eq!(
            domain.references["mychannel"],
            vec![ChaincodeReference {
                name: "basic".to_string(),
                version: "1.0".to_string(),
            }]
        );
    }

    #[test]
    fn test_serializes_without_empty_references() {
        let installed = InstalledChaincode {
            package_id: "p1".to_string(),
            label: "l1".to_string(),
            references: BTreeMap::new(),
        };
        let json = serde_json::to_string(&installed).unwrap();
        assert_eq!(json, r#"{"package_id":"p1","label":"l1"}"#);
    }
}
