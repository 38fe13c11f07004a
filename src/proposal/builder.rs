//! Fluent builder for chaincode transaction proposals.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::AdminResult;
use crate::identity::ProposalSigner;
use crate::proposal::context::TransactionContext;
use crate::proposal::Proposal;
use crate::protos;
use crate::protos::common::{ChannelHeader, Header, HeaderType};
use crate::protos::peer::{
    self, ChaincodeHeaderExtension, ChaincodeId, ChaincodeInput, ChaincodeInvocationSpec,
    ChaincodeProposalPayload, ChaincodeSpec,
};

/// Builder for a chaincode invocation proposal.
///
/// The chaincode and function (transaction) names are required; channel,
/// arguments and transient data are optional.
///
/// # Example
///
/// ```rust,ignore
/// let proposal = ProposalBuilder::new("_lifecycle", "QueryInstalledChaincodes")
///     .bytes_arguments([args])
///     .build(&signing_id)?;
/// let signed = proposal.sign(&signing_id)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProposalBuilder {
    channel_name: String,
    chaincode_name: String,
    transaction_name: String,
    args: Vec<Vec<u8>>,
    transient: HashMap<String, Vec<u8>>,
}

impl ProposalBuilder {
    pub fn new(chaincode_name: impl Into<String>, transaction_name: impl Into<String>) -> Self {
        Self {
            chaincode_name: chaincode_name.into(),
            transaction_name: transaction_name.into(),
            ..Self::default()
        }
    }

    /// Channel to which the proposal is directed. Empty targets the peer itself.
    pub fn channel(mut self, channel_name: impl Into<String>) -> Self {
        self.channel_name = channel_name.into();
        self
    }

    /// Append byte arguments after any already supplied.
    pub fn bytes_arguments<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Vec<u8>>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append string arguments after any already supplied.
    pub fn arguments<I, A>(self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        self.bytes_arguments(args.into_iter().map(|a| a.as_ref().as_bytes().to_vec()))
    }

    /// Transient data, passed to the chaincode but never written to the ledger.
    /// Replaces any previously supplied map.
    pub fn transient(mut self, transient: HashMap<String, Vec<u8>>) -> Self {
        self.transient = transient;
        self
    }

    /// Build the proposal with a freshly generated transaction context.
    pub fn build<S: ProposalSigner>(self, signer: &S) -> AdminResult<Proposal> {
        let transaction_ctx = TransactionContext::new(signer)?;
        self.build_with_context(transaction_ctx)
    }

    /// Build the proposal around an existing transaction context, consuming it.
    pub fn build_with_context(self, transaction_ctx: TransactionContext) -> AdminResult<Proposal> {
        let (transaction_id, signature_header) = transaction_ctx.into_parts();

        let header = Header {
            channel_header: self.channel_header_bytes(&transaction_id)?,
            signature_header: protos::encode(&signature_header)?,
        };
        let payload = self.chaincode_proposal_payload_bytes()?;

        tracing::debug!(
            tx_id = %transaction_id,
            chaincode = %self.chaincode_name,
            function = %self.transaction_name,
            channel = %self.channel_name,
            "Built proposal"
        );

        Ok(Proposal::new(
            transaction_id,
            peer::Proposal {
                header: protos::encode(&header)?,
                payload,
                extension: Vec::new(),
            },
        ))
    }

    fn chaincode_id(&self) -> ChaincodeId {
        ChaincodeId {
            name: self.chaincode_name.clone(),
            ..ChaincodeId::default()
        }
    }

    fn channel_header_bytes(&self, transaction_id: &str) -> AdminResult<Vec<u8>> {
        let extension = protos::encode(&ChaincodeHeaderExtension {
            chaincode_id: Some(self.chaincode_id()),
        })?;

        let now = Utc::now();
        protos::encode(&ChannelHeader {
            r#type: HeaderType::EndorserTransaction as i32,
            timestamp: Some(prost_types::Timestamp {
                seconds: now.timestamp(),
                nanos: now.timestamp_subsec_nanos() as i32,
            }),
            channel_id: self.channel_name.clone(),
            tx_id: transaction_id.to_string(),
            epoch: 0,
            extension,
            ..ChannelHeader::default()
        })
    }

    fn chaincode_proposal_payload_bytes(&self) -> AdminResult<Vec<u8>> {
        let invocation_spec = protos::encode(&ChaincodeInvocationSpec {
            chaincode_spec: Some(ChaincodeSpec {
                chaincode_id: Some(self.chaincode_id()),
                input: Some(ChaincodeInput {
                    args: self.chaincode_args(),
                    ..ChaincodeInput::default()
                }),
                ..ChaincodeSpec::default()
            }),
        })?;

        protos::encode(&ChaincodeProposalPayload {
            input: invocation_spec,
            transient_map: self.transient.clone(),
        })
    }

    /// Function name first, then positional arguments in the order supplied.
    fn chaincode_args(&self) -> Vec<Vec<u8>> {
        let mut result = Vec::with_capacity(self.args.len() + 1);
        result.push(self.transaction_name.as_bytes().to_vec());
        result.extend(self.args.iter().cloned());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{Creator, Identity, SigningIdentity};
    use crate::proposal::context::NONCE_LENGTH;
    use crate::protos::common::SignatureHeader;
    use prost::Message;

    fn signing_identity() -> SigningIdentity {
        SigningIdentity::new(Identity::new("Org1MSP", b"CREDENTIALS".to_vec()))
    }

    fn decode_header(proposal: &Proposal) -> (ChannelHeader, SignatureHeader) {
        let header = Header::decode(proposal.message().header.as_slice()).unwrap();
        (
            ChannelHeader::decode(header.channel_header.as_slice()).unwrap(),
            SignatureHeader::decode(header.signature_header.as_slice()).unwrap(),
        )
    }

    fn decode_payload(proposal: &Proposal) -> (ChaincodeProposalPayload, ChaincodeSpec) {
        let payload =
            ChaincodeProposalPayload::decode(proposal.message().payload.as_slice()).unwrap();
        let spec = ChaincodeInvocationSpec::decode(payload.input.as_slice())
            .unwrap()
            .chaincode_spec
            .unwrap();
        (payload, spec)
    }

    #[test]
    fn test_channel_header_fields() {
        let signing_id = signing_identity();
        let proposal = ProposalBuilder::new("CHAINCODE", "TRANSACTION")
            .channel("mychannel")
            .build(&signing_id)
            .unwrap();

        let (channel_header, _) = decode_header(&proposal);
        assert_eq!(channel_header.r#type, 3);
        assert_eq!(channel_header.channel_id, "mychannel");
        assert_eq!(channel_header.tx_id, proposal.transaction_id());
        assert_eq!(channel_header.epoch, 0);
        assert!(channel_header.timestamp.is_some());

        let extension = ChaincodeHeaderExtension::decode(channel_header.extension.as_slice()).unwrap();
        assert_eq!(extension.chaincode_id.unwrap().name, "CHAINCODE");
    }

    #[test]
    fn test_signature_header_matches_context() {
        let signing_id = signing_identity();
        let ctx = TransactionContext::from_nonce(&signing_id, [3; NONCE_LENGTH]).unwrap();
        let expected_tx_id = ctx.transaction_id().to_string();

        let proposal = ProposalBuilder::new("CHAINCODE", "TRANSACTION")
            .build_with_context(ctx)
            .unwrap();

        let (channel_header, signature_header) = decode_header(&proposal);
        assert_eq!(proposal.transaction_id(), expected_tx_id);
        assert_eq!(channel_header.tx_id, expected_tx_id);
        assert_eq!(signature_header.creator, signing_id.creator().unwrap());
        assert_eq!(signature_header.nonce, vec![3; NONCE_LENGTH]);
    }

    #[test]
    fn test_default_channel_is_empty() {
        let proposal = ProposalBuilder::new("CHAINCODE", "TRANSACTION")
            .build(&signing_identity())
            .unwrap();

        let (channel_header, _) = decode_header(&proposal);
        assert_eq!(channel_header.channel_id, "");
    }

    #[test]
    fn test_function_name_is_first_argument() {
        let proposal = ProposalBuilder::new("CHAINCODE", "TRANSACTION")
            .arguments(["one", "two"])
            .bytes_arguments([vec![0u8, 1, 2]])
            .build(&signing_identity())
            .unwrap();

        let (_, spec) = decode_payload(&proposal);
        assert_eq!(spec.chaincode_id.unwrap().name, "CHAINCODE");
        assert_eq!(
            spec.input.unwrap().args,
            vec![
                b"TRANSACTION".to_vec(),
                b"one".to_vec(),
                b"two".to_vec(),
                vec![0, 1, 2],
            ]
        );
    }

    #[test]
    fn test_no_arguments_gives_function_name_only() {
        let proposal = ProposalBuilder::new("CHAINCODE", "TRANSACTION")
            .build(&signing_identity())
            .unwrap();

        let (_, spec) = decode_payload(&proposal);
        assert_eq!(spec.input.unwrap().args, vec![b"TRANSACTION".to_vec()]);
    }

    #[test]
    fn test_transient_data_in_payload() {
        let transient = HashMap::from([
            ("price".to_string(), b"100".to_vec()),
            ("secret".to_string(), vec![0xde, 0xad]),
        ]);

        let proposal = ProposalBuilder::new("CHAINCODE", "TRANSACTION")
            .transient(transient.clone())
            .build(&signing_identity())
            .unwrap();

        let (payload, _) = decode_payload(&proposal);
        assert_eq!(payload.transient_map, transient);
    }

    #[test]
    fn test_each_build_gets_new_transaction_id() {
        let signing_id = signing_identity();
        let builder = ProposalBuilder::new("CHAINCODE", "TRANSACTION");

        let first = builder.clone().build(&signing_id).unwrap();
        let second = builder.build(&signing_id).unwrap();
        assert_ne!(first.transaction_id(), second.transaction_id());
    }
}
