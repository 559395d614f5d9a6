//! Constants used in the deploy scripts

/// The string from which the address provider's deployment salt is derived
pub const ADDRESS_PROVIDER_SALT_STRING: &str = "address provider";

/// The deterministic deployment factory used for periphery contracts
pub const DEFAULT_DEPLOYER_FACTORY: &str = "0x8D85e7c9A4e369E53Acc8d5426aE1568198b0112";

/// The governance address passed to the address provider's constructor
pub const DEFAULT_GOVERNANCE: &str = "0x33333333D5eFb92f19a5F94a43456b3cec2797AE";

/// The RPC URL used when none is configured
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The address provider key in the deployments file
pub const ADDRESS_PROVIDER_DEPLOYMENTS_KEY: &str = "AddressProvider";

/// The prompt shown to the operator before broadcasting a deployment
pub const CONFIRMATION_PROMPT: &str = "Do you want to continue?";

/// The separator printed around the deployment result
pub const RESULT_SEPARATOR: &str = "------------------";
