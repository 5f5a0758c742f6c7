//! Utilities for the deploy scripts

use alloy::primitives::Address;

use crate::{
    errors::ScriptError,
    output_writer::{read_output_file, OutputKeys},
};

/// Parses a hex contract address from a CLI argument
pub fn parse_address(raw: &str) -> Result<Address, ScriptError> {
    raw.parse::<Address>()
        .map_err(|e| ScriptError::CalldataConstruction(format!("{}: {}", raw, e)))
}

/// Resolves a contract address from an optional CLI override, falling back
/// to the address recorded in the deployed addresses file
pub fn address_from_arg_or_file(
    arg: Option<&str>,
    file_path: &str,
    key: &'static str,
) -> Result<Address, ScriptError> {
    match arg {
        Some(raw) => parse_address(raw),
        None => parse_address(&read_output_file(
            file_path,
            OutputKeys::Deployment { key },
        )?),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::parse_address;

    #[test]
    fn parses_checksummed_and_lowercase_addresses() {
        let expected = address!("4F499C43b8060FB794147B18cefec7D5Ad76107D");
        assert_eq!(
            parse_address("0x4F499C43b8060FB794147B18cefec7D5Ad76107D").unwrap(),
            expected
        );
        assert_eq!(
            parse_address("0x4f499c43b8060fb794147b18cefec7d5ad76107d").unwrap(),
            expected
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(parse_address("not-an-address").is_err());
        assert!(parse_address("0x1234").is_err());
    }
}
