use serde::{Deserialize, Serialize};

use crate::quantity;

/// Result of `mc_syncing`.
///
/// The node answers with the literal `false` when idle and with a
/// progress object otherwise.  Both collapse into this one type:
/// `Syncing::default()` is the idle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SyncProgress", into = "SyncProgress")]
pub struct Syncing {
    pub is_syncing: bool,
    pub starting_block: u64,
    pub current_block: u64,
    pub highest_block: u64,
}

impl Syncing {
    /// Blocks still to import; zero when idle.
    pub fn remaining(&self) -> u64 {
        self.highest_block.saturating_sub(self.current_block)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SyncProgress {
    #[serde(with = "quantity::serde_u64")]
    starting_block: u64,
    #[serde(with = "quantity::serde_u64")]
    current_block: u64,
    #[serde(with = "quantity::serde_u64")]
    highest_block: u64,
}

impl From<SyncProgress> for Syncing {
    fn from(progress: SyncProgress) -> Self {
        Self {
            is_syncing: true,
            starting_block: progress.starting_block,
            current_block: progress.current_block,
            highest_block: progress.highest_block,
        }
    }
}

impl From<Syncing> for SyncProgress {
    fn from(syncing: Syncing) -> Self {
        Self {
            starting_block: syncing.starting_block,
            current_block: syncing.current_block,
            highest_block: syncing.highest_block,
        }
    }
}
