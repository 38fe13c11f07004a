//! `lifecycle` package messages: arguments and results of the `_lifecycle`
//! system chaincode.

use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstallChaincodeArgs {
    #[prost(bytes = "vec", tag = "1")]
    pub chaincode_install_package: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstallChaincodeResult {
    #[prost(string, tag = "1")]
    pub package_id: String,
    #[prost(string, tag = "2")]
    pub label: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryInstalledChaincodesArgs {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryInstalledChaincodesResult {
    #[prost(message, repeated, tag = "1")]
    pub installed_chaincodes: Vec<InstalledChaincode>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstalledChaincode {
    #[prost(string, tag = "1")]
    pub package_id: String,
    #[prost(string, tag = "2")]
    pub label: String,
    /// Channel name → chaincode definitions referencing this package.
    #[prost(map = "string, message", tag = "3")]
    pub references: HashMap<String, References>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct References {
    #[prost(message, repeated, tag = "1")]
    pub chaincodes: Vec<Chaincode>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Chaincode {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
}
