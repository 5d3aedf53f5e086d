use {
    crate::libs::{
        logger::FileLogger,
        moac::{MoacRpc, ReqwestTransport},
    },
    anyhow::{Context, Result},
    dotenv::dotenv,
    serde::{Deserialize, Serialize},
    std::{fmt::Debug, str::FromStr, time::Duration},
};

pub fn load_env() {
    dotenv().ok();
}

/// Settings for the bundled binary.  The client itself reads nothing
/// from the environment; everything goes through [`Config::client`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub moac_rpc: String,
    pub debug: bool,
    /// Debug lines go to stderr when unset.
    pub log_dir: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            moac_rpc: crate::constants::DEFAULT_MOAC_RPC.to_string(),
            debug: false,
            log_dir: None,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Read `MOAC_RPC`, `MOAC_DEBUG`, `MOAC_LOG_DIR` and
    /// `MOAC_TIMEOUT_SECS`, after loading `.env` if present.
    pub fn new() -> Self {
        use crate::constants::{MOAC_DEBUG, MOAC_LOG_DIR, MOAC_RPC, MOAC_TIMEOUT_SECS};

        Self {
            moac_rpc: MOAC_RPC.clone(),
            debug: *MOAC_DEBUG,
            log_dir: Some(MOAC_LOG_DIR.clone()).filter(|dir| !dir.is_empty()),
            timeout_secs: *MOAC_TIMEOUT_SECS,
        }
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .unwrap_or(default)
    }

    /// Build a client for these settings.
    pub fn client(&self) -> Result<MoacRpc> {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(self.timeout_secs))
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        let client = MoacRpc::new(&self.moac_rpc)
            .with_context(|| format!("Failed to parse MOAC_RPC: {}", self.moac_rpc))?
            .with_transport(transport)
            .with_debug(self.debug);

        Ok(match &self.log_dir {
            Some(dir) => client.with_logger(FileLogger::new(dir)),
            None => client,
        })
    }
}
