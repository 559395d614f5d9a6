//! Implementations of the deploy scripts

use alloy::{
    primitives::{utils::format_ether, Address},
    providers::{DynProvider, Provider},
};
use tool_utils::prompt_for_confirmation;
use tracing::{info, warn};

use crate::{
    artifacts::load_init_code,
    cli::{AddressProviderArgs, DeployAddressProviderArgs},
    constants::{ADDRESS_PROVIDER_DEPLOYMENTS_KEY, CONFIRMATION_PROMPT, RESULT_SEPARATOR},
    errors::ScriptError,
    solidity::Deployer,
    types::DeploymentPlan,
    utils::{deployed_address_from_logs, read_deployed_address, write_deployed_address},
};

/// Build the deployment plan described by the CLI arguments
fn plan_address_provider(args: &AddressProviderArgs) -> Result<DeploymentPlan, ScriptError> {
    let init_code = load_init_code(&args.artifact)?;
    DeploymentPlan::address_provider(&init_code, args.governance, &args.salt_string)
}

/// Deploy the address provider through the factory and record its address.
///
/// Failures of the deployment transaction are surfaced as is, the script
/// performs no retries.
pub async fn deploy_address_provider(
    args: DeployAddressProviderArgs,
    provider: DynProvider,
    sender: Address,
) -> Result<(), ScriptError> {
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Deploying Address Provider on ChainID {}", chain_id);

    if !args.skip_confirmation
        && !prompt_for_confirmation(CONFIRMATION_PROMPT)
            .map_err(|e| ScriptError::Prompt(e.to_string()))?
    {
        warn!("Deployment aborted");
        return Ok(());
    }

    let args = args.address_provider;
    let plan = plan_address_provider(&args)?;
    info!("Salt we are using {}", plan.salt);

    let balance = provider
        .get_balance(sender)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Init balance: {}", format_ether(balance));

    info!("Deploying Address Provider...");
    let deployer = Deployer::new(args.factory, provider);
    let receipt = deployer
        .deploy(plan.payload.clone(), plan.salt)
        .from(sender)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "deployment transaction {} reverted",
            receipt.transaction_hash
        )));
    }

    let address = deployed_address_from_logs(receipt.inner.logs(), args.factory)?;

    println!("{}", RESULT_SEPARATOR);
    println!("Deployed the address provider to {}", address);
    println!("{}", RESULT_SEPARATOR);
    println!(
        "Encoded Constructor to use for verification {}",
        plan.constructor_args_hex()
    );

    write_deployed_address(&args.deployments, ADDRESS_PROVIDER_DEPLOYMENTS_KEY, address)
}

/// Print the address provider's deployment payload hash & predicted address
pub fn predict_address_provider(args: AddressProviderArgs) -> Result<(), ScriptError> {
    let plan = plan_address_provider(&args)?;
    let predicted = plan.predicted_address(args.factory);

    info!("Salt we are using {}", plan.salt);
    println!("Payload hash {}", plan.payload_hash());
    println!("Predicted address provider address {}", predicted);
    println!(
        "Encoded Constructor to use for verification {}",
        plan.constructor_args_hex()
    );

    // Compare against a previous deployment, if one was recorded
    if args.deployments.exists() {
        match read_deployed_address(&args.deployments, ADDRESS_PROVIDER_DEPLOYMENTS_KEY) {
            Ok(recorded) if recorded == predicted => {
                info!("Recorded deployment matches the predicted address")
            }
            Ok(recorded) => warn!(
                "Recorded deployment {} differs from the predicted address {}",
                recorded, predicted
            ),
            Err(e) => warn!("Could not read recorded deployment: {}", e),
        }
    }

    Ok(())
}
