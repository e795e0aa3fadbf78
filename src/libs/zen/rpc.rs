use std::fmt;

use alloy::primitives::{Address, TxHash, U256};
use alloy::signers::local::PrivateKeySigner;
use anyhow::Result;

use crate::libs::errors::ZenError;

/// A signing key plus the address derived from it.
#[derive(Clone)]
pub struct ZenWallet {
    signer: PrivateKeySigner,
    pub address: Address,
}

impl ZenWallet {
    pub fn from_private_key(private_key: &str) -> Result<Self, ZenError> {
        let signer: PrivateKeySigner = private_key
            .trim()
            .parse()
            .map_err(|_| ZenError::InvalidPrivateKey)?;
        Ok(Self {
            address: signer.address(),
            signer,
        })
    }

    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl fmt::Debug for ZenWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZenWallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Inclusion record of a submitted transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub success: bool,
}

/// What the balance reporter and the quickstart need from a node.
/// Every call is a single attempt; callers decide whether a failure is fatal.
#[allow(async_fn_in_trait)]
pub trait ChainRpc {
    async fn chain_id(&self) -> Result<u64>;

    async fn block_number(&self) -> Result<u64>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<U256>;

    /// Balance in wei at the latest block.
    async fn balance(&self, address: Address) -> Result<U256>;

    fn derive_wallet(&self, private_key: &str) -> Result<ZenWallet> {
        Ok(ZenWallet::from_private_key(private_key)?)
    }

    /// Sign and broadcast a plain value transfer. Returns as soon as the node
    /// accepts the transaction.
    async fn send_value(&self, wallet: &ZenWallet, to: Address, amount: U256) -> Result<TxHash>;

    /// Block until the transaction has a receipt.
    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<Receipt>;
}
