use alloy::primitives::utils::parse_units;
use alloy::primitives::U256;
use anyhow::{bail, Result};

use crate::network::{GWEI_DECIMALS, NATIVE_DECIMALS};

/// Render a base-unit amount with `decimals` places, trailing zeros trimmed
/// down to one (`1.0`, `0.0`). Works over the whole `U256` range.
pub fn format_units(amount: U256, decimals: u32) -> String {
    let base = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / base;
    let frac = amount % base;
    if frac.is_zero() {
        return format!("{whole}.0");
    }
    let mut frac_str = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}

pub fn format_ztc(wei: U256) -> String {
    format_units(wei, NATIVE_DECIMALS)
}

pub fn format_gwei(wei: U256) -> String {
    format_units(wei, GWEI_DECIMALS)
}

/// Parse a human ZTC amount ("0.000001") into wei. More than 18 fractional
/// digits is an error, never a truncation.
pub fn parse_ztc(amount: &str) -> Result<U256> {
    let s = amount.trim();
    if s.is_empty() {
        bail!("amount is empty");
    }
    if s.starts_with('-') {
        bail!("amount must not be negative");
    }
    if let Some((_, frac)) = s.split_once('.') {
        if frac.len() > NATIVE_DECIMALS as usize {
            bail!("too many decimals: {} > {NATIVE_DECIMALS}", frac.len());
        }
    }
    match parse_units(s, NATIVE_DECIMALS as u8) {
        Ok(parsed) => Ok(parsed.into()),
        Err(e) => bail!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_trims_fraction() {
        let v = U256::from(1_234_000_000_000_000_000u128);
        assert_eq!(format_ztc(v), "1.234");
        assert_eq!(format_ztc(U256::from(10u64).pow(U256::from(18u64))), "1.0");
        assert_eq!(format_ztc(U256::ZERO), "0.0");
        assert_eq!(format_ztc(U256::from(1u64)), "0.000000000000000001");
    }

    #[test]
    fn format_gwei_of_gas_price() {
        assert_eq!(format_gwei(U256::from(1_500_000_000u64)), "1.5");
        assert_eq!(format_gwei(U256::from(7u64)), "0.000000007");
        assert_eq!(format_gwei(U256::from(2_000_000_000u64)), "2.0");
    }

    #[test]
    fn format_handles_values_past_u128() {
        let v = U256::MAX;
        let s = format_ztc(v);
        assert!(s.starts_with("115792089237316195423570985008687907853269984665640564039457"));
        assert!(s.contains('.'));
    }

    #[test]
    fn default_amount_survives_parse_and_format() {
        let wei = parse_ztc("0.000001").unwrap();
        assert_eq!(wei, U256::from(1_000_000_000_000u64));
        assert_eq!(format_ztc(wei), "0.000001");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_ztc("").is_err());
        assert!(parse_ztc("abc").is_err());
        assert!(parse_ztc("-1").is_err());
        assert_eq!(parse_ztc(" 2 ").unwrap(), U256::from(2_000_000_000_000_000_000u128));
    }

    #[test]
    fn parse_rejects_excess_decimals() {
        let err = parse_ztc("0.0000000000000000019").unwrap_err();
        assert!(err.to_string().contains("too many decimals"));
        assert_eq!(parse_ztc("0.000000000000000001").unwrap(), U256::from(1u64));
        assert_eq!(parse_ztc(".5").unwrap(), U256::from(500_000_000_000_000_000u64));
    }
}
