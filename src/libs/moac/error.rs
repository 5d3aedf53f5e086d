use std::fmt;

use mctypes::QuantityError;
use serde::{Deserialize, Serialize};

use super::transport::TransportError;

/// Error object carried in a JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {} ({})", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

/// What part of a response failed to decode.
#[derive(Debug, thiserror::Error)]
pub enum DecodeErrorKind {
    /// The body or the result did not match the expected JSON shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A hex quantity was malformed or too wide.
    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

/// Errors returned by [`MoacRpc`](super::client::MoacRpc).  None of
/// them are retried here.
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The request never produced a response.
    #[error("{method}: {source}")]
    Transport {
        method: String,
        #[source]
        source: TransportError,
    },

    /// The request parameters cannot be serialized as JSON.
    #[error("{method}: failed to encode request: {source}")]
    Encode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response, or a typed value inside it, failed to decode.
    #[error("{method}: failed to decode '{payload}': {source}")]
    Decode {
        method: String,
        /// The offending text
        payload: String,
        #[source]
        source: DecodeErrorKind,
    },

    /// The node rejected the call.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

impl RpcClientError {
    pub(crate) fn decode(
        method: &str,
        payload: impl Into<String>,
        source: impl Into<DecodeErrorKind>,
    ) -> Self {
        Self::Decode {
            method: method.to_string(),
            payload: payload.into(),
            source: source.into(),
        }
    }

    /// The node's error object, if the node rejected the call.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_display_keeps_code_and_message() {
        let error = RpcError {
            code: -32601,
            message: "the method mc_foo does not exist/is not available".into(),
        };
        assert_eq!(
            error.to_string(),
            "Error -32601 (the method mc_foo does not exist/is not available)"
        );

        let wrapped = RpcClientError::from(error.clone());
        assert_eq!(wrapped.to_string(), error.to_string());
        assert_eq!(wrapped.rpc_error(), Some(&error));
    }

    #[test]
    fn decode_error_names_method_and_payload() {
        let quantity = mctypes::parse_int("0xzz").unwrap_err();
        let error = RpcClientError::decode("mc_blockNumber", "0xzz", quantity);

        assert!(error.is_decode());
        assert!(!error.is_transport());
        assert_eq!(
            error.to_string(),
            "mc_blockNumber: failed to decode '0xzz': quantity `0xzz` contains non-hex characters"
        );
    }
}
