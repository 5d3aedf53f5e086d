use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::quantity;

/// A transaction as reported by the node.
///
/// Blocks fetched without full transactions only know the hash; those
/// are represented with every other field left at its default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    #[serde(with = "quantity::serde_u64")]
    pub nonce: u64,
    pub block_hash: Option<String>,
    #[serde(with = "quantity::serde_opt_u64")]
    pub block_number: Option<u64>,
    #[serde(with = "quantity::serde_opt_u64")]
    pub transaction_index: Option<u64>,
    pub from: String,
    /// `None` for contract creation.
    pub to: Option<String>,
    #[serde(with = "quantity::serde_u256")]
    pub value: U256,
    #[serde(with = "quantity::serde_u64")]
    pub gas: u64,
    #[serde(with = "quantity::serde_u256")]
    pub gas_price: U256,
    pub input: String,
}

impl Transaction {
    /// A transaction known only by its hash.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            ..Default::default()
        }
    }
}

impl From<String> for Transaction {
    fn from(hash: String) -> Self {
        Self::from_hash(hash)
    }
}

/// The call object accepted by `mc_call`, `mc_estimateGas` and
/// `mc_sendTransaction`.  Unset parts are left out of the wire object
/// so the node applies its own defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "quantity::serde_opt_u64"
    )]
    pub gas: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "quantity::serde_opt_u256"
    )]
    pub gas_price: Option<U256>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "quantity::serde_opt_u256"
    )]
    pub value: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "quantity::serde_opt_u64"
    )]
    pub nonce: Option<u64>,
}

impl TransactionRequest {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..Default::default()
        }
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    pub fn gas_price(mut self, gas_price: U256) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}
