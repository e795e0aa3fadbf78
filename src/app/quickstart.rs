use std::io::Write;

use alloy::primitives::{TxHash, U256};
use anyhow::{Context, Result};
use zenchain::{format_gwei, format_ztc, parse_ztc, tx_url, NATIVE_SYMBOL};

use crate::libs::config::Config;
use crate::libs::errors::ZenError;
use crate::libs::writing::{cc, Colors};
use crate::libs::zen::rpc::{ChainRpc, ZenWallet};
use crate::libs::zen::spells::{check_chain, fetch_network_info, parse_address, NetworkInfo};
use crate::log;

/// Where the quickstart stopped. Every variant exits 0; fatal conditions are
/// returned as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickstartOutcome {
    /// No `PRIVATE_KEY`: network info only.
    ReadOnly,
    /// Wallet loaded but no `TO`.
    NoRecipient,
    InsufficientFunds { balance: U256, requested: U256 },
    Confirmed { tx_hash: TxHash, block_number: u64 },
    TransferFailed(String),
}

/// Progress through the quickstart. Each step either advances or lands in
/// `Done` with one of the terminal outcomes.
#[derive(Debug)]
enum QuickstartState {
    Connected,
    ChainVerified,
    WalletLoaded {
        wallet: ZenWallet,
        balance: U256,
    },
    AmountResolved {
        wallet: ZenWallet,
        balance: U256,
        to: String,
        amount: U256,
    },
    Sent {
        tx_hash: TxHash,
    },
    Done(QuickstartOutcome),
}

/// Print network info and, when a key and recipient are configured, send
/// one small transfer and wait for it to be mined.
pub async fn run_quickstart<R: ChainRpc, W: Write>(
    cfg: &Config,
    rpc: &R,
    out: &mut Colors<W>,
) -> Result<QuickstartOutcome> {
    let mut state = QuickstartState::Connected;
    loop {
        state = match state {
            QuickstartState::Connected => {
                let info = fetch_network_info(rpc).await?;
                print_network_info(cfg, &info, out);
                if let Err(e) = check_chain(cfg.chain_id, info.chain_id) {
                    crate::warn!("Unexpected chainId. Check the RPC URL.");
                    return Err(e.into());
                }
                QuickstartState::ChainVerified
            }

            QuickstartState::ChainVerified => match cfg.private_key.as_deref() {
                None => {
                    out.cprint(
                        "No PRIVATE_KEY provided. Read-only mode complete.",
                        cc::LIGHT_GREEN,
                    );
                    out.print("Tip: set PRIVATE_KEY, TO, AMOUNT in .env to send a small test tx.");
                    QuickstartState::Done(QuickstartOutcome::ReadOnly)
                }
                Some(key) => {
                    let wallet = rpc.derive_wallet(key)?;
                    let balance = rpc
                        .balance(wallet.address)
                        .await
                        .context("failed to fetch wallet balance")?;
                    out.cprint("--- Wallet ---", cc::CYAN);
                    out.field("Address  ", wallet.address);
                    out.field("Balance  ", format!("{} {NATIVE_SYMBOL}", format_ztc(balance)));
                    QuickstartState::WalletLoaded { wallet, balance }
                }
            },

            QuickstartState::WalletLoaded { wallet, balance } => match cfg.to.clone() {
                None => {
                    out.blank();
                    out.cprint("No TO address set. Skipping transfer.", cc::LIGHT_GREEN);
                    QuickstartState::Done(QuickstartOutcome::NoRecipient)
                }
                Some(to) => {
                    let amount = parse_ztc(&cfg.amount).map_err(|e| ZenError::InvalidAmount {
                        input: cfg.amount.clone(),
                        reason: e.to_string(),
                    })?;
                    QuickstartState::AmountResolved {
                        wallet,
                        balance,
                        to,
                        amount,
                    }
                }
            },

            QuickstartState::AmountResolved {
                wallet,
                balance,
                to,
                amount,
            } => {
                if balance < amount {
                    out.blank();
                    out.err_print(&format!(
                        "Not enough balance to send {} {NATIVE_SYMBOL}.",
                        cfg.amount
                    ));
                    out.err_print("Get test ZTC from the faucet (if available) and retry.");
                    QuickstartState::Done(QuickstartOutcome::InsufficientFunds {
                        balance,
                        requested: amount,
                    })
                } else {
                    out.blank();
                    out.cprint("--- Sending Test TX ---", cc::CYAN);
                    out.field("To     ", &to);
                    out.field("Amount ", format!("{} {NATIVE_SYMBOL}", cfg.amount));
                    match send(rpc, &wallet, &to, amount).await {
                        Ok(tx_hash) => {
                            out.field("Tx sent! Hash", tx_hash);
                            out.field("Explorer     ", tx_url(&cfg.explorer_url, tx_hash));
                            out.print("Waiting for confirmation...");
                            QuickstartState::Sent { tx_hash }
                        }
                        Err(e) => transfer_failed(e),
                    }
                }
            }

            QuickstartState::Sent { tx_hash } => match rpc.wait_for_confirmation(tx_hash).await {
                Ok(receipt) if receipt.success => {
                    out.cprint(
                        &format!("Confirmed in block: {}", receipt.block_number),
                        cc::LIGHT_GREEN,
                    );
                    QuickstartState::Done(QuickstartOutcome::Confirmed {
                        tx_hash,
                        block_number: receipt.block_number,
                    })
                }
                Ok(receipt) => transfer_failed(anyhow::anyhow!(
                    "transaction reverted in block {}",
                    receipt.block_number
                )),
                Err(e) => transfer_failed(e),
            },

            QuickstartState::Done(outcome) => return Ok(outcome),
        };
    }
}

async fn send<R: ChainRpc>(rpc: &R, wallet: &ZenWallet, to: &str, amount: U256) -> Result<TxHash> {
    let to = parse_address(to).context("invalid recipient address")?;
    rpc.send_value(wallet, to, amount).await
}

fn transfer_failed(e: anyhow::Error) -> QuickstartState {
    log!(cc::LIGHT_RED, "TX failed: {:#}", e);
    QuickstartState::Done(QuickstartOutcome::TransferFailed(format!("{e:#}")))
}

fn print_network_info<W: Write>(cfg: &Config, info: &NetworkInfo, out: &mut Colors<W>) {
    out.cprint("--- ZenChain Testnet Network Info ---", cc::CYAN);
    out.field("RPC URL     ", &cfg.rpc_url);
    out.field("Reported ID ", info.chain_id);
    out.field("Expected ID ", cfg.chain_id);
    out.field("Name        ", &cfg.network_name);
    out.field("LatestBlock ", info.latest_block);
    out.field("Gas Price   ", format!("{} gwei", format_gwei(info.gas_price)));
    out.cprint("-------------------------------------", cc::CYAN);
    out.blank();
}
