use crate::foundation::error::{RainbowError, RainbowResult};

pub const UNKNOWN_NETWORK: &str = "Unknown Network";

pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Mainnet",
        3 => "Ropsten Testnet",
        4 => "Rinkeby Testnet",
        42 => "Kovan Testnet",
        _ => UNKNOWN_NETWORK,
    }
}

/// Parse a chain id as providers report it: `0x`-prefixed hex (`eth_chainId`) or decimal.
pub fn parse_chain_id(s: &str) -> RainbowResult<u64> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|_| RainbowError::validation(format!("invalid chain id \"{s}\"")))
}
