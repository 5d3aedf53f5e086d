//! Wire types for the MOAC JSON-RPC interface.
//!
//! Every integer the node sends is a hex quantity; [`quantity`] holds
//! the codec and the serde adapters the entity types are built on.
pub mod block;
pub mod filter;
pub mod log;
pub mod quantity;
pub mod receipt;
pub mod syncing;
pub mod transaction;

pub use alloy::primitives::U256;
pub use block::*;
pub use filter::*;
pub use log::*;
pub use quantity::{big_to_hex, int_to_hex, parse_big_int, parse_int, QuantityError};
pub use receipt::*;
pub use syncing::*;
pub use transaction::*;

/// One MOAC expressed in wei (10^18).
pub const MOAC_IN_WEI: u64 = 1_000_000_000_000_000_000;

/// 1 MOAC as a [`U256`] wei amount.
pub fn moac1() -> U256 {
    U256::from(MOAC_IN_WEI)
}
