use {
    crate::libs::errors::ZenError,
    dotenv::dotenv,
    serde::{Deserialize, Serialize},
    std::{fmt::Debug, str::FromStr},
    zenchain::network::{
        CHAIN_ID, DEFAULT_TRANSFER_AMOUNT, EXPLORER_URL, NETWORK_NAME, RPC_URL,
    },
};

pub fn load_env() {
    dotenv().ok();
}

/// Everything both entry points read from the process environment.
/// Network parameters default to the ZenChain Testnet constants; only the
/// RPC endpoint may be overridden (`ZEN_RPC`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: String,
    pub chain_id: u64,
    pub network_name: String,
    pub explorer_url: String,
    pub address: Option<String>,
    #[serde(skip_serializing)]
    pub private_key: Option<String>,
    pub to: Option<String>,
    pub amount: String,
    pub poll_interval_ms: u64,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: RPC_URL.to_string(),
            chain_id: CHAIN_ID,
            network_name: NETWORK_NAME.to_string(),
            explorer_url: EXPLORER_URL.to_string(),
            address: None,
            private_key: None,
            to: None,
            amount: DEFAULT_TRANSFER_AMOUNT.to_string(),
            poll_interval_ms: 1_000,
            color: true,
        }
    }
}

impl Config {
    /// Load `.env` and read the environment once.
    pub fn from_env() -> Self {
        load_env();
        let defaults = Self::default();
        Self {
            rpc_url: Self::get_opt("ZEN_RPC").unwrap_or(defaults.rpc_url),
            address: Self::get_opt("ADDRESS"),
            private_key: Self::get_opt("PRIVATE_KEY"),
            to: Self::get_opt("TO"),
            amount: Self::get_opt("AMOUNT").unwrap_or(defaults.amount),
            poll_interval_ms: Self::get_var_t("POLL_INTERVAL_MS", defaults.poll_interval_ms),
            color: std::env::var_os("NO_COLOR").is_none(),
            ..defaults
        }
    }

    /// `ADDRESS` is mandatory for the balance reporter.
    pub fn require_address(&self) -> Result<&str, ZenError> {
        self.address.as_deref().ok_or(ZenError::MissingEnv("ADDRESS"))
    }

    /// Non-empty env var, trimmed. Empty values count as unset.
    pub fn get_opt(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.trim().parse::<T>().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_zenchain_testnet() {
        let cfg = Config::default();
        assert_eq!(cfg.chain_id, 8408);
        assert_eq!(cfg.rpc_url, "https://zenchain-testnet.api.onfinality.io/public");
        assert_eq!(cfg.amount, "0.000001");
        assert!(cfg.private_key.is_none());
    }

    #[test]
    fn missing_address_is_reported_by_name() {
        let cfg = Config::default();
        let err = cfg.require_address().unwrap_err();
        assert_eq!(err.to_string(), "Please provide ADDRESS in .env file");
    }

    #[test]
    fn get_var_t_falls_back_on_unparsable() {
        std::env::set_var("ZENKIT_TEST_POLL", "not-a-number");
        assert_eq!(Config::get_var_t("ZENKIT_TEST_POLL", 250u64), 250);
        std::env::set_var("ZENKIT_TEST_POLL", " 40 ");
        assert_eq!(Config::get_var_t("ZENKIT_TEST_POLL", 250u64), 40);
        std::env::remove_var("ZENKIT_TEST_POLL");
    }

    #[test]
    fn blank_values_count_as_unset() {
        std::env::set_var("ZENKIT_TEST_BLANK", "   ");
        assert_eq!(Config::get_opt("ZENKIT_TEST_BLANK"), None);
        std::env::remove_var("ZENKIT_TEST_BLANK");
    }

    #[test]
    fn private_key_is_not_serialized() {
        let cfg = Config {
            private_key: Some("0xdeadbeef".into()),
            ..Config::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("deadbeef"));
    }
}
