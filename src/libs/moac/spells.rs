//! Convenience helpers on top of [`MoacRpc`]: balance lookups and
//! conversions between wei and human readable MOAC amounts.
use alloy::primitives::utils::{parse_units, UnitsError};
use alloy::primitives::U256;
use mctypes::{parse_big_int, QuantityError, MOAC_IN_WEI};

use super::client::{MoacRpc, Result};

/// Balance of `address` at the latest block, in wei.
pub fn get_balance(client: &MoacRpc, address: &str) -> Result<U256> {
    client.mc_get_balance(address, "latest")
}

/// Format a wei amount as MOAC, trimming trailing zeros of the
/// fraction: `1.5 MOAC`, `2 MOAC`.  Amounts too large for `u128`
/// are printed in wei instead.
pub fn format_moac(wei: U256) -> String {
    let Ok(v) = u128::try_from(wei) else {
        return format!("{wei} wei");
    };
    let unit = MOAC_IN_WEI as u128;
    let whole = v / unit;
    let frac = v % unit;

    if frac == 0 {
        format!("{whole} MOAC")
    } else {
        let frac_str = format!("{frac:018}");
        format!("{whole}.{} MOAC", frac_str.trim_end_matches('0'))
    }
}

/// [`format_moac`] for a raw hex quantity such as `"0xde0b6b3a7640000"`.
pub fn format_moac_hex(raw_hex: &str) -> std::result::Result<String, QuantityError> {
    parse_big_int(raw_hex.trim()).map(format_moac)
}

/// Parse a decimal MOAC amount (`"1.5"`) into wei.
pub fn parse_moac(amount: &str) -> std::result::Result<U256, UnitsError> {
    let amount = amount.trim();
    if amount.starts_with('-') {
        return Err(UnitsError::InvalidUnit(amount.to_string()));
    }
    Ok(parse_units(amount, "ether")?.into())
}
