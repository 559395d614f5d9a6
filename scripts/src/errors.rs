//! Definitions of errors that can occur during the execution of the deployment scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deployment scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
    /// Error parsing a contract compilation artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error constructing calldata for a contract method
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// An expected event was not found in a transaction receipt
    MissingEvent(String),
    /// Error reading the operator's answer to a prompt
    Prompt(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::MissingEvent(s) => write!(f, "missing event: {}", s),
            ScriptError::Prompt(s) => write!(f, "error reading prompt answer: {}", s),
        }
    }
}

impl Error for ScriptError {}
