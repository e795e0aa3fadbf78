use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::Signer;
use anyhow::{Context, Result};
use reqwest::Client as HttpClient;
use serde_json::Value;
use url::Url;

use super::rpc::{ChainRpc, Receipt, ZenWallet};
use super::spells::{parse_quantity, parse_quantity_u64, parse_receipt};
use crate::libs::config::Config;
use crate::libs::trace::{save_log_to_file, trim_chars};

pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Connection to a ZenChain JSON‑RPC endpoint.  Reads go out as plain
/// JSON‑RPC 2.0 POSTs over `reqwest`; value transfers are signed and
/// broadcast through an Alloy provider built per call with the wallet
/// attached and the chain id pinned.
#[derive(Clone, Debug)]
pub struct ZenClient {
    rpc_url: Url,
    http: HttpClient,
    chain_id: u64,
    poll_interval: Duration,
}

impl ZenClient {
    /// No network traffic happens here; the URL only has to parse.
    pub fn new(rpc_url: &str, chain_id: u64) -> Result<Self> {
        let url =
            Url::parse(rpc_url).with_context(|| format!("Failed to parse ZEN_RPC: {rpc_url}"))?;
        Ok(Self {
            rpc_url: url,
            http: HttpClient::new(),
            chain_id,
            poll_interval: Duration::from_millis(1_000),
        })
    }

    /// `POLL_INTERVAL_MS` below [`MIN_POLL_INTERVAL_MS`] is raised to it.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let poll_ms = cfg.poll_interval_ms.max(MIN_POLL_INTERVAL_MS);
        Ok(Self::new(&cfg.rpc_url, cfg.chain_id)?
            .with_poll_interval(Duration::from_millis(poll_ms)))
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// `eth_getTransactionReceipt`; `None` while the transaction is pending.
    pub async fn get_transaction_receipt(&self, tx_hash: TxHash) -> Result<Option<Receipt>> {
        let res = self
            .rpc("eth_getTransactionReceipt", serde_json::json!([tx_hash]))
            .await?;
        parse_receipt(&res)
    }

    async fn rpc(&self, method: &str, params: Value) -> Result<Value> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        save_log_to_file(&format!("[rpc] -> {method} {params}"));
        let res = self
            .http
            .post(self.rpc_url.as_str())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("{method}: request to {} failed", self.rpc_url))?;
        let status = res.status();
        let bytes = res.bytes().await?;
        let v: Value = match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) => {
                let sample = trim_chars(&String::from_utf8_lossy(&bytes), 512);
                let hint = if sample.trim_start().starts_with('<') {
                    "Response looks like HTML; ZEN_RPC may point at a gateway page. Ensure it is an HTTPS JSON-RPC endpoint."
                } else if sample.trim().is_empty() {
                    "Empty body from RPC. Endpoint may be down or require authentication."
                } else {
                    "Non‑JSON response from RPC."
                };
                save_log_to_file(&format!("[rpc] <- {method} decode error ({status}): {e}"));
                return Err(anyhow::anyhow!(
                    "RPC decode error ({status}): {e}. {hint}\nEndpoint: {}\nSample: {}",
                    self.rpc_url,
                    sample
                ));
            }
        };
        if let Some(err) = v.get("error") {
            save_log_to_file(&format!("[rpc] <- {method} error {err}"));
            anyhow::bail!("rpc error: {}", err);
        }
        let result = v.get("result").cloned().unwrap_or(Value::Null);
        save_log_to_file(&format!("[rpc] <- {method} {}", trim_chars(&result.to_string(), 256)));
        Ok(result)
    }
}

impl ChainRpc for ZenClient {
    async fn chain_id(&self) -> Result<u64> {
        let res = self.rpc("eth_chainId", serde_json::json!([])).await?;
        parse_quantity_u64(&res).context("bad chainId")
    }

    async fn block_number(&self) -> Result<u64> {
        let res = self.rpc("eth_blockNumber", serde_json::json!([])).await?;
        parse_quantity_u64(&res).context("bad blockNumber")
    }

    async fn gas_price(&self) -> Result<U256> {
        let res = self.rpc("eth_gasPrice", serde_json::json!([])).await?;
        parse_quantity(&res).context("bad gasPrice")
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        let res = self
            .rpc("eth_getBalance", serde_json::json!([address, "latest"]))
            .await?;
        parse_quantity(&res).context("bad balance")
    }

    async fn send_value(&self, wallet: &ZenWallet, to: Address, amount: U256) -> Result<TxHash> {
        let signer = wallet.signer().clone().with_chain_id(Some(self.chain_id));
        let provider = ProviderBuilder::new()
            .with_chain_id(self.chain_id)
            .wallet(signer)
            .connect_http(self.rpc_url.clone());

        let tx = TransactionRequest::default()
            .with_from(wallet.address)
            .with_to(to)
            .with_value(amount);
        save_log_to_file(&format!("[tx] sending {amount} wei {} -> {to}", wallet.address));
        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        save_log_to_file(&format!("[tx] accepted {tx_hash}"));
        Ok(tx_hash)
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<Receipt> {
        loop {
            if let Some(receipt) = self.get_transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
