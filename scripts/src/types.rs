//! Type definitions used throughout the scripts

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use periphery_common::constants::ZERO_ADDRESS;

use crate::{
    errors::ScriptError,
    utils::{
        address_provider_constructor_args, build_deploy_payload, derive_salt,
        predict_create2_address,
    },
};

/// Everything needed to submit an address provider deployment to the factory
#[derive(Clone, Debug)]
pub struct DeploymentPlan {
    /// The salt passed to the factory
    pub salt: U256,
    /// The ABI-encoded constructor arguments, needed for source verification
    pub constructor_args: Vec<u8>,
    /// The initialization bytecode followed by the constructor arguments
    pub payload: Bytes,
}

impl DeploymentPlan {
    /// Plan the deployment of the address provider with the given governance
    pub fn address_provider(
        init_code: &[u8],
        governance: Address,
        salt_string: &str,
    ) -> Result<Self, ScriptError> {
        if governance == ZERO_ADDRESS {
            return Err(ScriptError::CalldataConstruction(
                "governance cannot be the zero address".to_string(),
            ));
        }

        let constructor_args = address_provider_constructor_args(governance);
        let payload = build_deploy_payload(init_code, &constructor_args);

        Ok(Self {
            salt: derive_salt(salt_string),
            constructor_args,
            payload,
        })
    }

    /// The hash of the full deployment payload
    pub fn payload_hash(&self) -> B256 {
        keccak256(&self.payload)
    }

    /// The address at which `factory` would deploy the payload
    pub fn predicted_address(&self, factory: Address) -> Address {
        predict_create2_address(factory, self.salt, &self.payload)
    }

    /// The constructor arguments in hex, without a `0x` prefix, as expected
    /// by block explorers' source verification
    pub fn constructor_args_hex(&self) -> String {
        hex::encode(&self.constructor_args)
    }
}
