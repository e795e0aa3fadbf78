// ZenChain Testnet parameters.

pub const RPC_URL: &str = "https://zenchain-testnet.api.onfinality.io/public";
pub const CHAIN_ID: u64 = 8408;
pub const NETWORK_NAME: &str = "zenchain-testnet";
pub const EXPLORER_URL: &str = "https://zentrace.io";

pub const NATIVE_SYMBOL: &str = "ZTC";
pub const NATIVE_DECIMALS: u32 = 18;
pub const GWEI_DECIMALS: u32 = 9;

/// Transfer size used by the quickstart when `AMOUNT` is not set.
pub const DEFAULT_TRANSFER_AMOUNT: &str = "0.000001";

/// Explorer page for a transaction hash.
pub fn tx_url(explorer: &str, tx_hash: impl std::fmt::Display) -> String {
    format!("{}/tx/{tx_hash}", explorer.trim_end_matches('/'))
}
