use serde::{Deserialize, Serialize};

use crate::{quantity, Log};

/// Receipt of a mined transaction; pending transactions have none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(with = "quantity::serde_u64")]
    pub transaction_index: u64,
    pub block_hash: String,
    #[serde(with = "quantity::serde_u64")]
    pub block_number: u64,
    #[serde(with = "quantity::serde_u64")]
    pub cumulative_gas_used: u64,
    #[serde(with = "quantity::serde_u64")]
    pub gas_used: u64,
    /// Set only when the transaction created a contract.
    pub contract_address: Option<String>,
    pub logs: Vec<Log>,
    pub logs_bloom: String,
    /// Pre-byzantium state root.
    pub root: Option<String>,
    /// `"0x1"` on success, `"0x0"` on failure.
    pub status: Option<String>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> Option<bool> {
        self.status.as_deref().map(|status| status == "0x1")
    }
}
