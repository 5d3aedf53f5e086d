use serde::{Deserialize, Serialize};

use crate::quantity;

/// A single event log entry, as returned by `mc_getLogs`,
/// `mc_getFilterLogs`, `mc_getFilterChanges` and inside receipts.
///
/// Pending logs carry `null` positions, hence the options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Log {
    pub removed: bool,
    #[serde(with = "quantity::serde_opt_u64")]
    pub log_index: Option<u64>,
    #[serde(with = "quantity::serde_opt_u64")]
    pub transaction_index: Option<u64>,
    pub transaction_hash: Option<String>,
    #[serde(with = "quantity::serde_opt_u64")]
    pub block_number: Option<u64>,
    pub block_hash: Option<String>,
    pub address: String,
    pub data: String,
    pub topics: Vec<String>,
}
