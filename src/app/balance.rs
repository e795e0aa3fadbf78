use std::io::Write;

use alloy::primitives::{Address, U256};
use anyhow::Result;
use zenchain::{format_ztc, NATIVE_SYMBOL};

use crate::libs::config::Config;
use crate::libs::writing::{cc, Colors};
use crate::libs::zen::rpc::ChainRpc;
use crate::libs::zen::spells::{ensure_chain, parse_address};
use crate::log;

/// How a balance report ended. Both variants exit 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceOutcome {
    Reported { address: Address, balance: U256 },
    FetchFailed(String),
}

/// Check the chain, then print the native balance of `ADDRESS`.
///
/// A missing `ADDRESS` or a chain id other than `cfg.chain_id` is returned as
/// an error. A failed balance lookup is logged and reported as
/// [`BalanceOutcome::FetchFailed`].
pub async fn report_balance<R: ChainRpc, W: Write>(
    cfg: &Config,
    rpc: &R,
    out: &mut Colors<W>,
) -> Result<BalanceOutcome> {
    let address = cfg.require_address()?;

    ensure_chain(rpc, cfg.chain_id).await?;

    match fetch_balance(rpc, address).await {
        Ok((parsed, balance)) => {
            out.cprint("--- ZenChain Testnet Balance Checker ---", cc::CYAN);
            out.field("Address ", address);
            out.field("Balance ", format!("{} {NATIVE_SYMBOL}", format_ztc(balance)));
            out.cprint("-----------------------------------------", cc::CYAN);
            Ok(BalanceOutcome::Reported {
                address: parsed,
                balance,
            })
        }
        Err(e) => {
            log!(cc::LIGHT_RED, "Error fetching balance: {:#}", e);
            Ok(BalanceOutcome::FetchFailed(format!("{e:#}")))
        }
    }
}

async fn fetch_balance<R: ChainRpc>(rpc: &R, address: &str) -> Result<(Address, U256)> {
    let parsed = parse_address(address)?;
    let balance = rpc.balance(parsed).await?;
    Ok((parsed, balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock::{one_ztc, MockRpc, TEST_ADDRESS};
    use crate::libs::errors::ZenError;

    fn cfg_with_address(address: Option<&str>) -> Config {
        Config {
            address: address.map(str::to_string),
            ..Config::default()
        }
    }

    fn output(out: Colors<Vec<u8>>) -> String {
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn prints_balance_scaled_by_1e18() -> Result<()> {
        let rpc = MockRpc {
            balance: U256::from(2_500_000_000_000_000_000u128),
            ..MockRpc::default()
        };
        let mut out = Colors::plain(Vec::new());
        let outcome = report_balance(&cfg_with_address(Some(TEST_ADDRESS)), &rpc, &mut out).await?;

        let expected_addr: Address = TEST_ADDRESS.parse()?;
        assert_eq!(
            outcome,
            BalanceOutcome::Reported {
                address: expected_addr,
                balance: U256::from(2_500_000_000_000_000_000u128),
            }
        );
        let text = output(out);
        assert!(text.contains(&format!("Address : {TEST_ADDRESS}")));
        assert!(text.contains("Balance : 2.5 ZTC"));
        assert_eq!(rpc.calls(), vec!["chain_id", "balance"]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_address_fails_before_any_call() {
        let rpc = MockRpc::default();
        let mut out = Colors::plain(Vec::new());
        let err = report_balance(&cfg_with_address(None), &rpc, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ZenError>(),
            Some(ZenError::MissingEnv("ADDRESS"))
        ));
        assert!(rpc.calls().is_empty());
        assert!(!output(out).contains("Balance"));
    }

    #[tokio::test]
    async fn wrong_chain_is_fatal() {
        let rpc = MockRpc {
            chain_id: 1,
            ..MockRpc::default()
        };
        let mut out = Colors::plain(Vec::new());
        let err = report_balance(&cfg_with_address(Some(TEST_ADDRESS)), &rpc, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ZenError>(),
            Some(ZenError::ChainMismatch { expected: 8408, got: 1 })
        ));
        assert!(!rpc.called("balance"));
        assert!(output(out).is_empty());
    }

    #[tokio::test]
    async fn balance_failure_is_not_fatal() -> Result<()> {
        let rpc = MockRpc {
            fail_balance: true,
            ..MockRpc::default()
        };
        let mut out = Colors::plain(Vec::new());
        let outcome = report_balance(&cfg_with_address(Some(TEST_ADDRESS)), &rpc, &mut out).await?;

        match outcome {
            BalanceOutcome::FetchFailed(msg) => assert!(msg.contains("connection reset")),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(!output(out).contains("Balance"));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_address_is_a_fetch_failure() -> Result<()> {
        let rpc = MockRpc::default();
        let mut out = Colors::plain(Vec::new());
        let outcome = report_balance(&cfg_with_address(Some("0xnot-an-address")), &rpc, &mut out).await?;

        assert!(matches!(outcome, BalanceOutcome::FetchFailed(ref m) if m.contains("invalid address")));
        assert_eq!(rpc.calls(), vec!["chain_id"]);
        Ok(())
    }

    #[tokio::test]
    async fn bad_checksum_address_is_a_fetch_failure() -> Result<()> {
        let rpc = MockRpc::default();
        let mut out = Colors::plain(Vec::new());
        let mistyped = "0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        let outcome = report_balance(&cfg_with_address(Some(mistyped)), &rpc, &mut out).await?;

        assert!(matches!(outcome, BalanceOutcome::FetchFailed(ref m) if m.contains("invalid address")));
        assert!(!rpc.called("balance"));
        assert!(!output(out).contains("Balance"));
        Ok(())
    }

    #[tokio::test]
    async fn whole_balance_keeps_one_decimal() -> Result<()> {
        let rpc = MockRpc {
            balance: one_ztc(),
            ..MockRpc::default()
        };
        let mut out = Colors::plain(Vec::new());
        report_balance(&cfg_with_address(Some(TEST_ADDRESS)), &rpc, &mut out).await?;
        assert!(output(out).contains("Balance : 1.0 ZTC"));
        Ok(())
    }
}
