use serde::{Deserialize, Serialize};

/// Query description for `mc_newFilter` and `mc_getLogs`.  The node
/// owns the filter; this side only carries the parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_block: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<Vec<String>>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block tag or hex number.
    pub fn from_block(mut self, block: impl Into<String>) -> Self {
        self.from_block = Some(block.into());
        self
    }

    pub fn to_block(mut self, block: impl Into<String>) -> Self {
        self.to_block = Some(block.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address.push(address.into());
        self
    }

    /// Add one topic position; any of `alternatives` matches it.
    pub fn topic<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics
            .push(alternatives.into_iter().map(Into::into).collect());
        self
    }
}
