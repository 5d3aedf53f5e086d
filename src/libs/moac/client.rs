//! The [`MoacRpc`] type wraps a MOAC node's JSON‑RPC endpoint and
//! exposes one blocking method per RPC call.  Every method funnels
//! through [`MoacRpc::call`], which performs exactly one HTTP round
//! trip and hands back the undecoded `result`; the typed wrappers only
//! differ in what they decode that result into.
use std::sync::Arc;

use alloy::primitives::U256;
use mctypes::{
    decode_block, int_to_hex, parse_big_int, parse_int, Block, FilterParams, Log, Syncing,
    Transaction, TransactionReceipt, TransactionRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;
use url::Url;

use super::envelope::{parse_response, Request};
use super::error::RpcClientError;
use super::transport::{HttpTransport, ReqwestTransport};
use crate::libs::logger::{Logger, StderrLogger};

pub type Result<T> = std::result::Result<T, RpcClientError>;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Positional parameters for methods that take none.
const NO_PARAMS: [(); 0] = [];

/// Blocking JSON‑RPC client for a MOAC node.
///
/// The transport, logger and debug flag are fixed at construction.
/// Nothing else is held between calls, so one instance can be cloned
/// or shared across threads freely as long as the transport allows it.
#[derive(Clone)]
pub struct MoacRpc {
    url: Url,
    transport: Arc<dyn HttpTransport>,
    log: Arc<dyn Logger>,
    debug: bool,
}

impl std::fmt::Debug for MoacRpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoacRpc")
            .field("url", &self.url.as_str())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl MoacRpc {
    /// Client for `url` using the default blocking HTTP transport and a
    /// stderr logger, with debug output off.
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(url)?,
            transport: Arc::new(ReqwestTransport::new()),
            log: Arc::new(StderrLogger),
            debug: false,
        })
    }

    /// Replace the HTTP transport.
    pub fn with_transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Replace the sink for debug lines.
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.log = Arc::new(logger);
        self
    }

    /// Log every raw request/response pair when enabled.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Issue `method` with positional `params` (anything serializing to
    /// a JSON array: a tuple, slice or `Vec<Value>`) and return the raw
    /// `result` of the response.
    pub fn call<P: Serialize>(&self, method: &str, params: P) -> Result<Box<RawValue>> {
        let body = Request::new(method, &params).to_vec()?;

        let response = self
            .transport
            .post(self.url.as_str(), CONTENT_TYPE_JSON, body.clone())
            .map_err(|source| RpcClientError::Transport {
                method: method.to_string(),
                source,
            })?;

        if self.debug {
            self.log.println(&format!(
                "{method}\nRequest: {}\nResponse: {}\n",
                String::from_utf8_lossy(&body),
                String::from_utf8_lossy(&response.body),
            ));
        }

        parse_response(method, &response.body)
    }

    /// Same as [`call`](Self::call).
    #[deprecated(note = "use `call`")]
    pub fn raw_call<P: Serialize>(&self, method: &str, params: P) -> Result<Box<RawValue>> {
        self.call(method, params)
    }

    /// Call `method` and decode the result as `T`.
    pub fn call_as<T: DeserializeOwned, P: Serialize>(&self, method: &str, params: P) -> Result<T> {
        let raw = self.call(method, params)?;
        decode(method, &raw)
    }

    fn call_quantity<P: Serialize>(&self, method: &str, params: P) -> Result<u64> {
        let hex: String = self.call_as(method, params)?;
        parse_int(&hex).map_err(|e| RpcClientError::decode(method, hex, e))
    }

    fn call_wei<P: Serialize>(&self, method: &str, params: P) -> Result<U256> {
        let hex: String = self.call_as(method, params)?;
        parse_big_int(&hex).map_err(|e| RpcClientError::decode(method, hex, e))
    }

    fn call_logs<P: Serialize>(&self, method: &str, params: P) -> Result<Vec<Log>> {
        let logs: Option<Vec<Log>> = self.call_as(method, params)?;
        Ok(logs.unwrap_or_default())
    }

    /// Returns the current client version.
    pub fn chain3_client_version(&self) -> Result<String> {
        self.call_as("chain3_clientVersion", NO_PARAMS)
    }

    /// Returns Keccak-256 (not the standardized SHA3-256) of the given data.
    pub fn chain3_sha3(&self, data: &[u8]) -> Result<String> {
        self.call_as("chain3_sha3", (format!("0x{}", hex::encode(data)),))
    }

    /// Returns the current network id.
    pub fn net_version(&self) -> Result<String> {
        self.call_as("net_version", NO_PARAMS)
    }

    /// Returns true if the node is actively listening for network connections.
    pub fn net_listening(&self) -> Result<bool> {
        self.call_as("net_listening", NO_PARAMS)
    }

    /// Returns the number of peers currently connected to the node.
    pub fn net_peer_count(&self) -> Result<u64> {
        self.call_quantity("net_peerCount", NO_PARAMS)
    }

    /// Returns the current moac protocol version.
    pub fn mc_protocol_version(&self) -> Result<String> {
        self.call_as("mc_protocolVersion", NO_PARAMS)
    }

    /// Returns the sync progress, or [`Syncing::default`] when the node
    /// answers `false` or `null`.
    pub fn mc_syncing(&self) -> Result<Syncing> {
        const METHOD: &str = "mc_syncing";
        let raw = self.call(METHOD, NO_PARAMS)?;
        if matches!(raw.get(), "false" | "null") {
            return Ok(Syncing::default());
        }
        decode(METHOD, &raw)
    }

    /// Returns the node's coinbase address.
    pub fn mc_coinbase(&self) -> Result<String> {
        self.call_as("mc_coinbase", NO_PARAMS)
    }

    /// Returns true if the node is actively mining new blocks.
    pub fn mc_mining(&self) -> Result<bool> {
        self.call_as("mc_mining", NO_PARAMS)
    }

    /// Returns the number of hashes per second the node is mining with.
    pub fn mc_hashrate(&self) -> Result<u64> {
        self.call_quantity("mc_hashrate", NO_PARAMS)
    }

    /// Returns the current price per gas in wei.
    pub fn mc_gas_price(&self) -> Result<U256> {
        self.call_wei("mc_gasPrice", NO_PARAMS)
    }

    /// Returns the addresses owned by the node.
    pub fn mc_accounts(&self) -> Result<Vec<String>> {
        let accounts: Option<Vec<String>> = self.call_as("mc_accounts", NO_PARAMS)?;
        Ok(accounts.unwrap_or_default())
    }

    /// Returns the number of the most recent block.
    pub fn mc_block_number(&self) -> Result<u64> {
        self.call_quantity("mc_blockNumber", NO_PARAMS)
    }

    /// Returns the balance in wei of `address` at block `tag`.
    pub fn mc_get_balance(&self, address: &str, tag: &str) -> Result<U256> {
        self.call_wei("mc_getBalance", (address, tag))
    }

    /// Returns the value at storage `position` of `address`.
    pub fn mc_get_storage_at(&self, address: &str, position: u64, tag: &str) -> Result<String> {
        self.call_as("mc_getStorageAt", (address, int_to_hex(position), tag))
    }

    /// Returns the number of transactions sent from `address`.
    pub fn mc_get_transaction_count(&self, address: &str, tag: &str) -> Result<u64> {
        self.call_quantity("mc_getTransactionCount", (address, tag))
    }

    /// Returns the number of transactions in the block with `hash`.
    pub fn mc_get_block_transaction_count_by_hash(&self, hash: &str) -> Result<u64> {
        self.call_quantity("mc_getBlockTransactionCountByHash", (hash,))
    }

    /// Returns the number of transactions in block `number`.
    pub fn mc_get_block_transaction_count_by_number(&self, number: u64) -> Result<u64> {
        self.call_quantity("mc_getBlockTransactionCountByNumber", (int_to_hex(number),))
    }

    /// Returns the number of uncles in the block with `hash`.
    pub fn mc_get_uncle_count_by_block_hash(&self, hash: &str) -> Result<u64> {
        self.call_quantity("mc_getUncleCountByBlockHash", (hash,))
    }

    /// Returns the number of uncles in block `number`.
    pub fn mc_get_uncle_count_by_block_number(&self, number: u64) -> Result<u64> {
        self.call_quantity("mc_getUncleCountByBlockNumber", (int_to_hex(number),))
    }

    /// Returns the code deployed at `address`.
    pub fn mc_get_code(&self, address: &str, tag: &str) -> Result<String> {
        self.call_as("mc_getCode", (address, tag))
    }

    /// Signs `data` with the key of `address`, which must be unlocked on
    /// the node.
    pub fn mc_sign(&self, address: &str, data: &str) -> Result<String> {
        self.call_as("mc_sign", (address, data))
    }

    /// Creates a message call or contract creation and returns its hash.
    pub fn mc_send_transaction(&self, transaction: &TransactionRequest) -> Result<String> {
        self.call_as("mc_sendTransaction", (transaction,))
    }

    /// Submits an already signed transaction and returns its hash.
    pub fn mc_send_raw_transaction(&self, data: &str) -> Result<String> {
        self.call_as("mc_sendRawTransaction", (data,))
    }

    /// Executes a call without creating a transaction on chain.
    pub fn mc_call(&self, transaction: &TransactionRequest, tag: &str) -> Result<String> {
        self.call_as("mc_call", (transaction, tag))
    }

    /// Returns the gas `transaction` would use.
    pub fn mc_estimate_gas(&self, transaction: &TransactionRequest) -> Result<u64> {
        self.call_quantity("mc_estimateGas", (transaction,))
    }

    fn get_block<P: Serialize>(
        &self,
        method: &str,
        with_transactions: bool,
        params: P,
    ) -> Result<Option<Block>> {
        let raw = self.call(method, params)?;
        if raw.get() == "null" {
            return Ok(None);
        }
        decode_block(raw.get(), with_transactions)
            .map(Some)
            .map_err(|e| RpcClientError::decode(method, raw.get(), e))
    }

    /// Returns the block with `hash`, `None` if the node does not know
    /// it.  With `with_transactions` unset the block's transactions
    /// only carry their hash.
    pub fn mc_get_block_by_hash(
        &self,
        hash: &str,
        with_transactions: bool,
    ) -> Result<Option<Block>> {
        self.get_block(
            "mc_getBlockByHash",
            with_transactions,
            (hash, with_transactions),
        )
    }

    /// Returns block `number`, see [`mc_get_block_by_hash`](Self::mc_get_block_by_hash).
    pub fn mc_get_block_by_number(
        &self,
        number: u64,
        with_transactions: bool,
    ) -> Result<Option<Block>> {
        self.get_block(
            "mc_getBlockByNumber",
            with_transactions,
            (int_to_hex(number), with_transactions),
        )
    }

    /// Returns the transaction with `hash`.
    pub fn mc_get_transaction_by_hash(&self, hash: &str) -> Result<Option<Transaction>> {
        self.call_as("mc_getTransactionByHash", (hash,))
    }

    /// Returns the transaction at `index` in the block with `block_hash`.
    pub fn mc_get_transaction_by_block_hash_and_index(
        &self,
        block_hash: &str,
        index: u64,
    ) -> Result<Option<Transaction>> {
        self.call_as(
            "mc_getTransactionByBlockHashAndIndex",
            (block_hash, int_to_hex(index)),
        )
    }

    /// Returns the transaction at `index` in block `number`.
    pub fn mc_get_transaction_by_block_number_and_index(
        &self,
        number: u64,
        index: u64,
    ) -> Result<Option<Transaction>> {
        self.call_as(
            "mc_getTransactionByBlockNumberAndIndex",
            (int_to_hex(number), int_to_hex(index)),
        )
    }

    /// Returns the receipt of transaction `hash`; pending transactions
    /// have none.
    pub fn mc_get_transaction_receipt(&self, hash: &str) -> Result<Option<TransactionReceipt>> {
        self.call_as("mc_getTransactionReceipt", (hash,))
    }

    /// Returns the compilers available on the node.
    pub fn mc_get_compilers(&self) -> Result<Vec<String>> {
        let compilers: Option<Vec<String>> = self.call_as("mc_getCompilers", NO_PARAMS)?;
        Ok(compilers.unwrap_or_default())
    }

    /// Creates a log filter on the node and returns its id.
    pub fn mc_new_filter(&self, params: &FilterParams) -> Result<String> {
        self.call_as("mc_newFilter", (params,))
    }

    /// Creates a filter notified of new blocks; poll it with
    /// [`mc_get_filter_changes`](Self::mc_get_filter_changes).
    pub fn mc_new_block_filter(&self) -> Result<String> {
        self.call_as("mc_newBlockFilter", NO_PARAMS)
    }

    /// Creates a filter notified of new pending transactions; poll it
    /// with [`mc_get_filter_changes`](Self::mc_get_filter_changes).
    pub fn mc_new_pending_transaction_filter(&self) -> Result<String> {
        self.call_as("mc_newPendingTransactionFilter", NO_PARAMS)
    }

    /// Removes the filter with `filter_id`.
    pub fn mc_uninstall_filter(&self, filter_id: &str) -> Result<bool> {
        self.call_as("mc_uninstallFilter", (filter_id,))
    }

    /// Logs produced since the last poll of `filter_id`.
    pub fn mc_get_filter_changes(&self, filter_id: &str) -> Result<Vec<Log>> {
        self.call_logs("mc_getFilterChanges", (filter_id,))
    }

    /// All logs matching the filter with `filter_id`.
    pub fn mc_get_filter_logs(&self, filter_id: &str) -> Result<Vec<Log>> {
        self.call_logs("mc_getFilterLogs", (filter_id,))
    }

    /// All logs matching `params`.
    pub fn mc_get_logs(&self, params: &FilterParams) -> Result<Vec<Log>> {
        self.call_logs("mc_getLogs", (params,))
    }

    /// 1 MOAC in wei.
    pub fn moac1(&self) -> U256 {
        mctypes::moac1()
    }
}

fn decode<T: DeserializeOwned>(method: &str, raw: &RawValue) -> Result<T> {
    serde_json::from_str(raw.get()).map_err(|e| RpcClientError::decode(method, raw.get(), e))
}
