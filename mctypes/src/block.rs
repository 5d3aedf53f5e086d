use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{quantity, Transaction};

/// A block with its transaction list normalized to [`Transaction`]s.
///
/// When the block was requested without full transactions each entry
/// only has `hash` set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// `None` for a pending block.
    #[serde(with = "quantity::serde_opt_u64")]
    pub number: Option<u64>,
    pub hash: Option<String>,
    pub parent_hash: String,
    pub nonce: Option<String>,
    pub sha3_uncles: String,
    pub logs_bloom: Option<String>,
    pub transactions_root: String,
    pub state_root: String,
    pub receipts_root: String,
    pub miner: String,
    #[serde(with = "quantity::serde_u256")]
    pub difficulty: U256,
    #[serde(with = "quantity::serde_u256")]
    pub total_difficulty: U256,
    pub extra_data: String,
    #[serde(with = "quantity::serde_u64")]
    pub size: u64,
    #[serde(with = "quantity::serde_u64")]
    pub gas_limit: u64,
    #[serde(with = "quantity::serde_u64")]
    pub gas_used: u64,
    #[serde(with = "quantity::serde_u64")]
    pub timestamp: u64,
    pub uncles: Vec<String>,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn transaction_hashes(&self) -> impl Iterator<Item = &str> {
        self.transactions.iter().map(|tx| tx.hash.as_str())
    }
}

/// The two shapes `mc_getBlockBy*` can return for `transactions`,
/// picked by the `with_transactions` flag of the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockTransactions {
    Hashes(Vec<String>),
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    pub fn len(&self) -> usize {
        match self {
            Self::Hashes(hashes) => hashes.len(),
            Self::Full(transactions) => transactions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        match self {
            Self::Hashes(hashes) => hashes.into_iter().map(Transaction::from_hash).collect(),
            Self::Full(transactions) => transactions,
        }
    }
}

/// Block as it sits on the wire, generic over the transaction list
/// element so both shapes share one set of header fields.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(deserialize = "Tx: Deserialize<'de> + Default")
)]
struct WireBlock<Tx> {
    #[serde(with = "quantity::serde_opt_u64")]
    number: Option<u64>,
    hash: Option<String>,
    parent_hash: String,
    nonce: Option<String>,
    sha3_uncles: String,
    logs_bloom: Option<String>,
    transactions_root: String,
    state_root: String,
    receipts_root: String,
    miner: String,
    #[serde(with = "quantity::serde_u256")]
    difficulty: U256,
    #[serde(with = "quantity::serde_u256")]
    total_difficulty: U256,
    extra_data: String,
    #[serde(with = "quantity::serde_u64")]
    size: u64,
    #[serde(with = "quantity::serde_u64")]
    gas_limit: u64,
    #[serde(with = "quantity::serde_u64")]
    gas_used: u64,
    #[serde(with = "quantity::serde_u64")]
    timestamp: u64,
    uncles: Vec<String>,
    transactions: Vec<Tx>,
}

impl<Tx> WireBlock<Tx> {
    fn into_block(self, transactions: BlockTransactions) -> Block {
        Block {
            number: self.number,
            hash: self.hash,
            parent_hash: self.parent_hash,
            nonce: self.nonce,
            sha3_uncles: self.sha3_uncles,
            logs_bloom: self.logs_bloom,
            transactions_root: self.transactions_root,
            state_root: self.state_root,
            receipts_root: self.receipts_root,
            miner: self.miner,
            difficulty: self.difficulty,
            total_difficulty: self.total_difficulty,
            extra_data: self.extra_data,
            size: self.size,
            gas_limit: self.gas_limit,
            gas_used: self.gas_used,
            timestamp: self.timestamp,
            uncles: self.uncles,
            transactions: transactions.into_transactions(),
        }
    }
}

/// Decode a block from `json`, reading `transactions` as full objects
/// when `with_transactions` is set and as hashes otherwise.
pub fn decode_block(json: &str, with_transactions: bool) -> serde_json::Result<Block> {
    if with_transactions {
        let mut wire: WireBlock<Transaction> = serde_json::from_str(json)?;
        let transactions = BlockTransactions::Full(std::mem::take(&mut wire.transactions));
        Ok(wire.into_block(transactions))
    } else {
        let mut wire: WireBlock<String> = serde_json::from_str(json)?;
        let transactions = BlockTransactions::Hashes(std::mem::take(&mut wire.transactions));
        Ok(wire.into_block(transactions))
    }
}
