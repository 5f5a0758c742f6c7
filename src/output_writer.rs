//! Reading and writing the deployed addresses file

use std::{fmt::LowerHex, fs, fs::File, io::Read, path::PathBuf};

use json::JsonValue;

use crate::errors::ScriptError;

/// The keys under which a value can be recorded in the output file
pub enum OutputKeys {
    /// Key related to a deployment
    Deployment {
        /// The contract the address belongs to
        key: &'static str,
    },
    /// Key related to a follow-up transaction on a deployed contract
    Tx {
        /// The contract the transaction was sent to
        key: &'static str,
        /// The transaction label
        tx_key: String,
    },
}

/// Reads a recorded value back from the output file
pub fn read_output_file(file_path: &str, key: OutputKeys) -> Result<String, ScriptError> {
    if !PathBuf::from(file_path).exists() {
        return Err(ScriptError::JsonOutputError(String::from(
            "Deployed addresses file not found",
        )));
    }

    // Parse it's json content into objects
    let parsed_json = get_json_from_file(file_path)?;
    let final_key = match key {
        OutputKeys::Deployment { key } => parsed_json[key]["deploy"].clone(),
        OutputKeys::Tx { key, tx_key } => parsed_json[key]["txs"][tx_key].clone(),
    };

    final_key
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ScriptError::JsonOutputError(String::from("key not found in output file")))
}

/// Writes the given value for the deployed contract
pub fn write_output_file<T: LowerHex>(
    file_path: &str,
    key: OutputKeys,
    value: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    // Parse it's json content into objects
    let mut parsed_json = get_json_from_file(file_path)?;

    // Update the right key
    match key {
        OutputKeys::Deployment { key } => {
            parsed_json[key]["deploy"] = JsonValue::String(format!("{value:#x}"))
        }
        OutputKeys::Tx { key, tx_key } => {
            parsed_json[key]["txs"][tx_key] = JsonValue::String(format!("{value:#x}"))
        }
    };

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use alloy::primitives::{address, b256};

    use super::{read_output_file, write_output_file, OutputKeys};

    /// Builds a unique output file path under the system temp dir
    fn temp_output_file(tag: &str) -> String {
        env::temp_dir()
            .join(format!("odon-deployed-{}-{}.json", tag, process::id()))
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn deployment_addresses_round_trip() {
        let path = temp_output_file("deploy");
        let odon = address!("28D3d93f3223A2B80E32e37311D4cB7147DeC5Cd");
        let usdc = address!("7A38D14fA901B9962df16300579f86B640413841");

        write_output_file(&path, OutputKeys::Deployment { key: "odon" }, odon).unwrap();
        write_output_file(&path, OutputKeys::Deployment { key: "usdc" }, usdc).unwrap();

        let read_back = read_output_file(&path, OutputKeys::Deployment { key: "odon" }).unwrap();
        assert_eq!(read_back, format!("{odon:#x}"));
        // A second write must not clobber earlier keys
        let read_back = read_output_file(&path, OutputKeys::Deployment { key: "usdc" }).unwrap();
        assert_eq!(read_back, format!("{usdc:#x}"));
    }

    #[test]
    fn tx_hashes_are_recorded_per_contract() {
        let path = temp_output_file("tx");
        let hash = b256!("6719c3d7d181688400f53aa312d01a6e9ad6cfa16719c3d7d181688400f53aa3");

        write_output_file(
            &path,
            OutputKeys::Tx {
                key: "loan",
                tx_key: "set_price_oracle".to_string(),
            },
            hash,
        )
        .unwrap();

        let read_back = read_output_file(
            &path,
            OutputKeys::Tx {
                key: "loan",
                tx_key: "set_price_oracle".to_string(),
            },
        )
        .unwrap();
        assert_eq!(read_back, format!("{hash:#x}"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = temp_output_file("absent");
        assert!(read_output_file(&path, OutputKeys::Deployment { key: "odon" }).is_err());
    }

    #[test]
    fn missing_key_is_an_error() {
        let path = temp_output_file("nokey");
        let odon = address!("28D3d93f3223A2B80E32e37311D4cB7147DeC5Cd");
        write_output_file(&path, OutputKeys::Deployment { key: "odon" }, odon).unwrap();
        assert!(read_output_file(&path, OutputKeys::Deployment { key: "loan" }).is_err());
    }
}
