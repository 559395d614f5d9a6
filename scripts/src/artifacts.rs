//! Loading of contract initialization bytecode from compilation artifacts.
//!
//! The following artifact formats are accepted:
//! - a raw hex file, optionally `0x`-prefixed
//! - an ethPM contract type, as emitted by ape (`deploymentBytecode.bytecode`)
//! - a Foundry artifact (`bytecode.object`)
//! - any JSON object whose `bytecode` field is a hex string

use std::{fs, path::Path};

use serde_json::Value;

use crate::errors::ScriptError;

/// JSON pointers at which artifact formats store the deployment bytecode,
/// in order of precedence
const BYTECODE_POINTERS: [&str; 3] = [
    "/deploymentBytecode/bytecode",
    "/bytecode/object",
    "/bytecode",
];

/// Read the initialization bytecode from the artifact at `path`
pub fn load_init_code(path: &Path) -> Result<Vec<u8>, ScriptError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

    parse_init_code(&contents)
}

/// Parse the initialization bytecode out of the contents of an artifact
pub fn parse_init_code(contents: &str) -> Result<Vec<u8>, ScriptError> {
    let contents = contents.trim();
    let code = if contents.starts_with('{') {
        let bytecode = bytecode_from_json(contents)?;
        decode_hex(&bytecode)?
    } else {
        decode_hex(contents)?
    };

    if code.is_empty() {
        return Err(ScriptError::ArtifactParsing(
            "artifact contains no bytecode".to_string(),
        ));
    }

    Ok(code)
}

/// Find the bytecode hex string in a JSON artifact
fn bytecode_from_json(contents: &str) -> Result<String, ScriptError> {
    let json: Value =
        serde_json::from_str(contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    BYTECODE_POINTERS
        .iter()
        .find_map(|pointer| json.pointer(pointer).and_then(Value::as_str))
        .map(str::to_string)
        .ok_or_else(|| {
            ScriptError::ArtifactParsing("no deployment bytecode found in artifact".to_string())
        })
}

/// Decode a hex string, with or without a `0x` prefix
fn decode_hex(s: &str) -> Result<Vec<u8>, ScriptError> {
    let s = s.trim();
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_init_code;

    #[test]
    fn test_raw_hex() {
        assert_eq!(parse_init_code("0x6080\n").unwrap(), vec![0x60, 0x80]);
        assert_eq!(parse_init_code("  60806040  ").unwrap(), vec![0x60, 0x80, 0x60, 0x40]);
    }

    #[test]
    fn test_ape_contract_type() {
        let artifact = r#"{
            "contractName": "AddressProvider",
            "deploymentBytecode": { "bytecode": "0x3461" },
            "runtimeBytecode": { "bytecode": "0x5f35" }
        }"#;

        assert_eq!(parse_init_code(artifact).unwrap(), vec![0x34, 0x61]);
    }

    #[test]
    fn test_foundry_artifact() {
        let artifact = r#"{
            "bytecode": { "object": "0x6080", "linkReferences": {} },
            "deployedBytecode": { "object": "0x6001" }
        }"#;

        assert_eq!(parse_init_code(artifact).unwrap(), vec![0x60, 0x80]);
    }

    #[test]
    fn test_plain_bytecode_field() {
        let artifact = r#"{ "abi": [], "bytecode": "0xfe" }"#;
        assert_eq!(parse_init_code(artifact).unwrap(), vec![0xfe]);
    }

    #[test]
    fn test_invalid_artifacts() {
        // Empty bytecode
        assert!(parse_init_code("0x").is_err());
        assert!(parse_init_code(r#"{ "bytecode": "0x" }"#).is_err());
        // No bytecode field
        assert!(parse_init_code(r#"{ "abi": [] }"#).is_err());
        // Unlinked library placeholder
        assert!(parse_init_code("0x6080__$1234$__").is_err());
    }
}
