//! Contract factory lookup, resolving deployment bytecode for a named contract

use std::{fs, path::Path};

use alloy::{hex, primitives::Bytes};

use crate::errors::ScriptError;

/// A contract ready for deployment: its name plus the creation bytecode
/// read from its compilation artifact
pub struct ContractFactory {
    /// Name of the contract, matching the artifact file stem
    pub name: String,
    /// The creation bytecode from the artifact
    bytecode: Vec<u8>,
}

/// Looks up the artifact for the given contract name and builds its factory.
///
/// Artifacts live at `<artifacts_dir>/<Name>.json`, with the creation
/// bytecode under the `bytecode` key as 0x-prefixed hex.
pub fn get_contract_factory(
    artifacts_dir: &str,
    name: &str,
) -> Result<ContractFactory, ScriptError> {
    let path = Path::new(artifacts_dir).join(format!("{}.json", name));
    if !path.exists() {
        return Err(ScriptError::ArtifactParsing(format!(
            "no artifact found for contract {}",
            name
        )));
    }

    let contents =
        fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    let parsed = json::parse(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode_hex = parsed["bytecode"].as_str().ok_or_else(|| {
        ScriptError::ArtifactParsing(format!("artifact for {} has no bytecode", name))
    })?;
    let bytecode = hex::decode(bytecode_hex.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactParsing(format!(
            "artifact for {} has empty bytecode",
            name
        )));
    }

    Ok(ContractFactory {
        name: name.to_string(),
        bytecode,
    })
}

impl ContractFactory {
    /// Builds the init code for a deployment: the creation bytecode with the
    /// ABI-encoded constructor arguments appended
    pub fn deploy_code(&self, ctor_args: &[u8]) -> Bytes {
        let mut code = self.bytecode.clone();
        code.extend_from_slice(ctor_args);
        code.into()
    }
}
