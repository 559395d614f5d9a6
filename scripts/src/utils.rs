//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, Bytes, B256, U256},
    providers::{DynProvider, ProviderBuilder},
    rpc::types::Log,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_sol_types::{SolConstructor, SolEvent};
use periphery_common::constants::{NUM_BYTES_ADDRESS, NUM_BYTES_WORD};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::{
    errors::ScriptError,
    solidity::{AddressProvider, Deployer},
};

/// Sets up a signing client for the given RPC url, returning it alongside
/// the address of the deployer
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<(DynProvider, Address), ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let sender = signer.address();

    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    Ok((DynProvider::new(provider), sender))
}

// ---------------------
// | Deployment Inputs |
// ---------------------

/// Derive a deployment salt from a string, interpreting the SHA-256 digest
/// of its UTF-8 bytes as a big-endian integer
pub fn derive_salt(salt_string: &str) -> U256 {
    let digest = Sha256::digest(salt_string.as_bytes());
    U256::from_be_slice(&digest)
}

/// The salt as the 32-byte word mixed into the create2 address
pub fn salt_bytes(salt: U256) -> B256 {
    B256::from(salt.to_be_bytes::<32>())
}

/// ABI-encode the arguments of the `AddressProvider` constructor
pub fn address_provider_constructor_args(governance: Address) -> Vec<u8> {
    AddressProvider::constructorCall { governance }.abi_encode()
}

/// Append the ABI-encoded constructor arguments to the initialization bytecode
pub fn build_deploy_payload(init_code: &[u8], constructor_args: &[u8]) -> Bytes {
    [init_code, constructor_args].concat().into()
}

/// The address at which a factory deploying `payload` with `salt` via
/// `CREATE2` places the contract, assuming the factory applies the salt as is
pub fn predict_create2_address(factory: Address, salt: U256, payload: &[u8]) -> Address {
    factory.create2_from_code(salt_bytes(salt), payload)
}

/// Find the address reported by the first `Deployed` event the factory emitted.
///
/// Factories declare the deployed address either as an indexed topic or as the
/// first data word; both layouts share the event signature and are accepted.
pub fn deployed_address_from_logs(logs: &[Log], factory: Address) -> Result<Address, ScriptError> {
    logs.iter()
        .filter(|log| log.address() == factory)
        .find_map(deployed_address)
        .ok_or_else(|| {
            ScriptError::MissingEvent(format!("no `Deployed` event emitted by {factory}"))
        })
}

/// The address carried by a single `Deployed` log, if it is one
fn deployed_address(log: &Log) -> Option<Address> {
    let topics = log.topics();
    if topics.first() != Some(&Deployer::Deployed::SIGNATURE_HASH) {
        return None;
    }

    match topics.get(1) {
        Some(topic) => Some(Address::from_word(*topic)),
        None => log
            .data()
            .data
            .get(NUM_BYTES_WORD - NUM_BYTES_ADDRESS..NUM_BYTES_WORD)
            .map(Address::from_slice),
    }
}

// ---------------
// | Deployments |
// ---------------

/// Read the JSON object stored in the deployments file
fn read_deployments(file_path: &Path) -> Result<Map<String, Value>, ScriptError> {
    let contents = fs::read_to_string(file_path)
        .map_err(|e| ScriptError::ReadDeployments(format!("{}: {}", file_path.display(), e)))?;

    match serde_json::from_str(&contents) {
        Ok(Value::Object(deployments)) => Ok(deployments),
        Ok(_) => Err(ScriptError::ReadDeployments(
            "deployments file is not a JSON object".to_string(),
        )),
        Err(e) => Err(ScriptError::ReadDeployments(e.to_string())),
    }
}

/// Read the address recorded under `contract_key` in the deployments file
pub fn read_deployed_address(
    file_path: &Path,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let deployments = read_deployments(file_path)?;

    let addr_str = deployments
        .get(contract_key)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!(
                "key {} not found in deployments file",
                contract_key
            ))
        })?;

    Address::from_str(addr_str).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Record `address` under `contract_key` in the deployments file, creating the
/// file if it does not exist and preserving any other entries
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut deployments = if file_path.exists() {
        read_deployments(file_path)?
    } else {
        Map::new()
    };

    deployments.insert(
        contract_key.to_string(),
        Value::String(address.to_checksum(None /* chain_id */)),
    );

    let contents = serde_json::to_string_pretty(&Value::Object(deployments))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, str::FromStr};

    use alloy::{
        primitives::{address, Address, Log as PrimitiveLog, LogData, B256, U256},
        rpc::types::Log,
    };
    use alloy_sol_types::SolEvent;
    use periphery_common::constants::{NUM_BYTES_ADDRESS, NUM_BYTES_WORD};

    use crate::{errors::ScriptError, solidity::Deployer};

    use super::{
        address_provider_constructor_args, build_deploy_payload, deployed_address_from_logs,
        derive_salt, predict_create2_address, read_deployed_address, salt_bytes,
        write_deployed_address,
    };

    /// A path in the system temp directory unique to the calling test
    fn temp_deployments_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "periphery-scripts-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    /// Build an RPC log for a `Deployed` event emitted by `emitter`
    fn deployed_log(emitter: Address, addr: Address) -> Log {
        let event = Deployer::Deployed {
            addr,
            salt: U256::from(1),
        };

        Log {
            inner: PrimitiveLog {
                address: emitter,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    /// Build an RPC log for a `Deployed` event whose address is not indexed,
    /// i.e. `Deployed(address addr, uint256 salt)`
    fn unindexed_deployed_log(emitter: Address, addr: Address) -> Log {
        let salt = U256::from(1).to_be_bytes::<32>();
        let data = [addr.into_word().as_slice(), salt.as_slice()].concat();

        Log {
            inner: PrimitiveLog {
                address: emitter,
                data: LogData::new_unchecked(vec![Deployer::Deployed::SIGNATURE_HASH], data.into()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_salt_is_deterministic() {
        let expected = U256::from_str(
            "13476920997752793447469330185897242238273528329391868269948580729240597053374",
        )
        .unwrap();

        assert_eq!(derive_salt("address provider"), expected);
        assert_eq!(derive_salt("address provider"), derive_salt("address provider"));
        assert_ne!(derive_salt("address provider"), derive_salt("Address Provider"));
    }

    #[test]
    fn test_salt_bytes_are_big_endian() {
        let salt = derive_salt("address provider");
        assert_eq!(
            salt_bytes(salt).to_string(),
            "0x1dcbaabe926a15813b14eebbc6c4550c100d89063c962c55a143c0d628e83fbe"
        );
    }

    #[test]
    fn test_constructor_args() {
        let governance = address!("33333333D5eFb92f19a5F94a43456b3cec2797AE");
        let args = address_provider_constructor_args(governance);

        assert_eq!(args.len(), NUM_BYTES_WORD);
        assert!(args[..NUM_BYTES_WORD - NUM_BYTES_ADDRESS].iter().all(|b| *b == 0));
        assert_eq!(&args[NUM_BYTES_WORD - NUM_BYTES_ADDRESS..], governance.as_slice());
    }

    #[test]
    fn test_payload_is_code_then_args() {
        let init_code = [0x60, 0x80, 0x60, 0x40];
        let args = address_provider_constructor_args(Address::repeat_byte(0x11));

        let payload = build_deploy_payload(&init_code, &args);

        assert_eq!(payload.len(), init_code.len() + args.len());
        assert_eq!(&payload[..init_code.len()], &init_code);
        assert_eq!(&payload[init_code.len()..], args.as_slice());
    }

    #[test]
    fn test_create2_address() {
        // Test vectors taken from: https://eips.ethereum.org/EIPS/eip-1014#examples
        assert_eq!(
            predict_create2_address(Address::ZERO, U256::ZERO, &[0x00]),
            address!("4D1A2e2bB4F88F0250f26Ffff098B0b30B26BF38")
        );
        assert_eq!(
            predict_create2_address(
                address!("00000000000000000000000000000000deadbeef"),
                U256::from(0xcafebabe_u64),
                &[0xde, 0xad, 0xbe, 0xef],
            ),
            address!("60f3f640a8508fC6a86d45DF051962668E1e8AC7")
        );
    }

    #[test]
    fn test_deployed_address_from_logs() {
        let factory = Address::repeat_byte(0xfa);
        let deployed = Address::repeat_byte(0xde);

        // A log with the same signature from another contract is ignored
        let logs = [
            deployed_log(Address::repeat_byte(0x01), Address::repeat_byte(0x02)),
            deployed_log(factory, deployed),
        ];
        assert_eq!(deployed_address_from_logs(&logs, factory).unwrap(), deployed);

        let err = deployed_address_from_logs(&logs[..1], factory);
        assert!(matches!(err, Err(ScriptError::MissingEvent(_))));
    }

    #[test]
    fn test_deployed_address_from_unindexed_event() {
        let factory = Address::repeat_byte(0xfa);
        let deployed = Address::repeat_byte(0xde);

        let logs = [unindexed_deployed_log(factory, deployed)];
        assert_eq!(deployed_address_from_logs(&logs, factory).unwrap(), deployed);

        // A log from the factory with a different signature is not a deployment
        let other = Log {
            inner: PrimitiveLog {
                address: factory,
                data: LogData::new_unchecked(vec![B256::repeat_byte(0x01)], Default::default()),
            },
            ..Default::default()
        };
        let err = deployed_address_from_logs(&[other], factory);
        assert!(matches!(err, Err(ScriptError::MissingEvent(_))));
    }

    #[test]
    fn test_deployments_file() {
        let path = temp_deployments_path("roundtrip");
        let first = Address::repeat_byte(0xaa);
        let second = Address::repeat_byte(0xbb);

        write_deployed_address(&path, "First", first).unwrap();
        write_deployed_address(&path, "Second", second).unwrap();

        assert_eq!(read_deployed_address(&path, "First").unwrap(), first);
        assert_eq!(read_deployed_address(&path, "Second").unwrap(), second);
        assert!(read_deployed_address(&path, "Third").is_err());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_deployments_file_must_be_object() {
        let path = temp_deployments_path("not-object");
        fs::write(&path, "[]").unwrap();

        let res = write_deployed_address(&path, "First", Address::ZERO);
        assert!(matches!(res, Err(ScriptError::ReadDeployments(_))));

        fs::remove_file(&path).unwrap();
    }
}
