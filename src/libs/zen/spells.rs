//! High level convenience functions shared by the two entry points.
//! Whereas [`crate::libs::zen::client::ZenClient`] exposes the raw RPC
//! calls, these helpers decode JSON‑RPC quantities and bundle the
//! network checks both flows start with.
use alloy::primitives::{Address, TxHash, U256};
use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;

use super::rpc::{ChainRpc, Receipt};
use crate::libs::errors::ZenError;

/// Decode a hex quantity such as `"0x0"`, `"0x1bc16d674ec80000"`.
/// RPC nodes drop leading zeros, so odd lengths are padded before decoding.
pub fn parse_quantity(value: &Value) -> Result<U256> {
    let raw = value.as_str().context("quantity not string")?;
    let mut stripped = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    if stripped.is_empty() {
        return Ok(U256::ZERO);
    }

    let padded;
    if stripped.len() % 2 == 1 {
        padded = format!("0{}", stripped);
        stripped = &padded;
    }

    let bytes = hex::decode(stripped).with_context(|| format!("bad quantity hex `{raw}`"))?;
    if bytes.len() > 32 {
        bail!("quantity `{raw}` does not fit in 256 bits");
    }
    Ok(U256::from_be_slice(&bytes))
}

/// Parse a 20-byte hex address. Mixed-case input must carry a valid EIP-55
/// checksum; all-lowercase and all-uppercase input is taken as is.
pub fn parse_address(input: &str) -> Result<Address> {
    let body = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let mixed_case = body.chars().any(|c| c.is_ascii_lowercase())
        && body.chars().any(|c| c.is_ascii_uppercase());
    let parsed = if mixed_case {
        Address::parse_checksummed(input, None).map_err(|e| anyhow!("{e}"))
    } else {
        input.parse::<Address>().map_err(|e| anyhow!("{e}"))
    };
    parsed.with_context(|| format!("invalid address `{input}`"))
}

pub fn parse_quantity_u64(value: &Value) -> Result<u64> {
    let q = parse_quantity(value)?;
    u64::try_from(q).map_err(|_| anyhow!("quantity {q} does not fit in u64"))
}

/// Decode an `eth_getTransactionReceipt` result. `null` means "not mined yet".
pub fn parse_receipt(value: &Value) -> Result<Option<Receipt>> {
    if value.is_null() {
        return Ok(None);
    }
    let hash = value
        .get("transactionHash")
        .and_then(|h| h.as_str())
        .context("receipt without transactionHash")?;
    let tx_hash: TxHash = hash.parse().context("bad receipt transactionHash")?;
    let block = value.get("blockNumber").context("receipt without blockNumber")?;
    if block.is_null() {
        return Ok(None);
    }
    let block_number = parse_quantity_u64(block)?;
    // pre-Byzantium receipts carry no status; treat those as success
    let success = match value.get("status") {
        Some(s) if !s.is_null() => parse_quantity(s)? == U256::from(1u64),
        _ => true,
    };
    Ok(Some(Receipt {
        tx_hash,
        block_number,
        success,
    }))
}

/// Snapshot printed at the top of the quickstart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub chain_id: u64,
    pub latest_block: u64,
    pub gas_price: U256,
}

pub async fn fetch_network_info<R: ChainRpc>(rpc: &R) -> Result<NetworkInfo> {
    let chain_id = rpc.chain_id().await.context("eth_chainId failed")?;
    let latest_block = rpc.block_number().await.context("eth_blockNumber failed")?;
    let gas_price = rpc.gas_price().await.context("eth_gasPrice failed")?;
    Ok(NetworkInfo {
        chain_id,
        latest_block,
        gas_price,
    })
}

/// Fail with [`ZenError::ChainMismatch`] unless the node reports `expected`.
pub fn check_chain(expected: u64, got: u64) -> Result<(), ZenError> {
    if got != expected {
        return Err(ZenError::ChainMismatch { expected, got });
    }
    Ok(())
}

/// Query the chain id and compare it against `expected`.
pub async fn ensure_chain<R: ChainRpc>(rpc: &R, expected: u64) -> Result<u64> {
    let got = rpc.chain_id().await.context("eth_chainId failed")?;
    check_chain(expected, got)?;
    Ok(got)
}
