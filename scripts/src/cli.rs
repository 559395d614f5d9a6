//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_address_provider, predict_address_provider},
    constants::{
        ADDRESS_PROVIDER_SALT_STRING, DEFAULT_DEPLOYER_FACTORY, DEFAULT_DEPLOYMENTS_PATH,
        DEFAULT_GOVERNANCE, DEFAULT_RPC_URL,
    },
    errors::ScriptError,
    utils::setup_client,
};

/// Deploy periphery contracts at deterministic addresses
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the address provider through the deterministic deployment factory
    DeployAddressProvider(DeployAddressProviderArgs),
    /// Compute the address provider's deployment payload and predicted address
    /// without sending any transaction
    PredictAddressProvider(AddressProviderArgs),
}

impl Command {
    /// Run the selected script
    pub async fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::DeployAddressProvider(args) => {
                let (provider, sender) = setup_client(&args.priv_key, &args.rpc_url)?;
                deploy_address_provider(args, provider, sender).await
            }
            Command::PredictAddressProvider(args) => predict_address_provider(args),
        }
    }
}

/// Arguments describing the address provider deployment
#[derive(Args, Clone)]
pub struct AddressProviderArgs {
    /// Path to the `AddressProvider` compilation artifact, either a raw hex
    /// bytecode file or an ape / Foundry JSON artifact
    #[arg(short, long)]
    pub artifact: PathBuf,

    /// Address of the deterministic deployment factory
    #[arg(short, long, default_value = DEFAULT_DEPLOYER_FACTORY)]
    pub factory: Address,

    /// Governance address passed to the address provider's constructor
    #[arg(short, long, default_value = DEFAULT_GOVERNANCE)]
    pub governance: Address,

    /// String from which the deployment salt is derived
    #[arg(short, long, default_value = ADDRESS_PROVIDER_SALT_STRING)]
    pub salt_string: String,

    /// Path to the file in which deployed addresses are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments: PathBuf,
}

/// Deploy the address provider
#[derive(Args)]
pub struct DeployAddressProviderArgs {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Deploy without asking for confirmation
    #[arg(long)]
    pub skip_confirmation: bool,

    /// The deployment to submit
    #[command(flatten)]
    pub address_provider: AddressProviderArgs,
}
