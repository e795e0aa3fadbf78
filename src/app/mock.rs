use std::sync::Mutex;

use alloy::primitives::{Address, TxHash, U256};
use anyhow::{bail, Result};

use crate::libs::zen::rpc::{ChainRpc, Receipt, ZenWallet};

pub const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

pub fn one_ztc() -> U256 {
    U256::from(1_000_000_000_000_000_000u128)
}

/// Scripted node. Records every call by method name.
pub struct MockRpc {
    pub chain_id: u64,
    pub block_number: u64,
    pub gas_price: U256,
    pub balance: U256,
    pub fail_balance: bool,
    pub fail_send: bool,
    pub tx_hash: TxHash,
    pub receipt_block: u64,
    pub receipt_success: bool,
    pub(crate) calls: Mutex<Vec<&'static str>>,
    pub(crate) sent: Mutex<Vec<(Address, Address, U256)>>,
}

impl Default for MockRpc {
    fn default() -> Self {
        Self {
            chain_id: 8408,
            block_number: 1_234_567,
            gas_price: U256::from(1_500_000_000u64),
            balance: one_ztc(),
            fail_balance: false,
            fail_send: false,
            tx_hash: TxHash::repeat_byte(0x11),
            receipt_block: 1_234_570,
            receipt_success: true,
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl MockRpc {
    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, method: &str) -> bool {
        self.calls().iter().any(|c| *c == method)
    }

    /// (from, to, amount) of every submission.
    pub fn sent(&self) -> Vec<(Address, Address, U256)> {
        self.sent.lock().unwrap().clone()
    }
}

impl ChainRpc for MockRpc {
    async fn chain_id(&self) -> Result<u64> {
        self.record("chain_id");
        Ok(self.chain_id)
    }

    async fn block_number(&self) -> Result<u64> {
        self.record("block_number");
        Ok(self.block_number)
    }

    async fn gas_price(&self) -> Result<U256> {
        self.record("gas_price");
        Ok(self.gas_price)
    }

    async fn balance(&self, _address: Address) -> Result<U256> {
        self.record("balance");
        if self.fail_balance {
            bail!("rpc error: connection reset");
        }
        Ok(self.balance)
    }

    fn derive_wallet(&self, private_key: &str) -> Result<ZenWallet> {
        self.record("derive_wallet");
        Ok(ZenWallet::from_private_key(private_key)?)
    }

    async fn send_value(&self, wallet: &ZenWallet, to: Address, amount: U256) -> Result<TxHash> {
        self.record("send_value");
        if self.fail_send {
            bail!("insufficient funds for gas * price + value");
        }
        self.sent.lock().unwrap().push((wallet.address, to, amount));
        Ok(self.tx_hash)
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<Receipt> {
        self.record("wait_for_confirmation");
        Ok(Receipt {
            tx_hash,
            block_number: self.receipt_block,
            success: self.receipt_success,
        })
    }
}
