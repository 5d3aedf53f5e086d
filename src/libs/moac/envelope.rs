//! JSON-RPC 2.0 request/response envelopes.
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::error::{RpcClientError, RpcError};

pub const JSONRPC_VERSION: &str = "2.0";

/// Every request carries this id.  Calls are strictly one round trip
/// each, so there is never a second in-flight request to tell apart.
pub const REQUEST_ID: u64 = 1;

/// Outgoing request.  Field order matches what nodes expect to see in
/// logs: `id`, `jsonrpc`, `method`, `params`.
#[derive(Debug, Serialize)]
pub struct Request<'a, P: Serialize> {
    pub id: u64,
    pub jsonrpc: &'static str,
    pub method: &'a str,
    /// Positional parameters; must serialize to a JSON array.
    pub params: &'a P,
}

impl<'a, P: Serialize> Request<'a, P> {
    pub fn new(method: &'a str, params: &'a P) -> Self {
        Self {
            id: REQUEST_ID,
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
        }
    }

    /// Serialize the request body.  Params that do not serialize to a
    /// JSON array are refused with [`RpcClientError::Encode`].
    pub fn to_vec(&self) -> Result<Vec<u8>, RpcClientError> {
        let encode = |source: serde_json::Error| RpcClientError::Encode {
            method: self.method.to_string(),
            source,
        };

        if !serde_json::to_value(self.params).map_err(encode)?.is_array() {
            return Err(encode(serde::ser::Error::custom(
                "params must serialize to a JSON array",
            )));
        }
        serde_json::to_vec(self).map_err(encode)
    }
}

/// Incoming response with the result left undecoded.
#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

impl Response {
    /// The raw result, or the node's error if one was sent.  A missing
    /// or `null` result comes back as the raw JSON `null`.
    pub fn into_result(self) -> Result<Box<RawValue>, RpcError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(self.result.unwrap_or_else(null))
    }
}

/// Parse a response body for `method` and extract its raw result.
pub fn parse_response(method: &str, body: &[u8]) -> Result<Box<RawValue>, RpcClientError> {
    let response: Response = serde_json::from_slice(body).map_err(|error| {
        RpcClientError::decode(method, String::from_utf8_lossy(body), error)
    })?;
    Ok(response.into_result()?)
}

fn null() -> Box<RawValue> {
    RawValue::from_string("null".to_string()).expect("null is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_in_wire_order() {
        let params = ("0xabc", "latest");
        let body = Request::new("mc_getBalance", &params).to_vec().unwrap();

        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"id":1,"jsonrpc":"2.0","method":"mc_getBalance","params":["0xabc","latest"]}"#
        );
    }

    #[test]
    fn empty_params_serialize_to_empty_array() {
        let params: [(); 0] = [];
        let body = Request::new("mc_blockNumber", &params).to_vec().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["params"], json!([]));
    }

    #[test]
    fn non_array_params_are_refused() {
        #[derive(Serialize)]
        struct Named {
            address: &'static str,
        }

        let named = Named { address: "0xabc" };
        let err = Request::new("mc_getBalance", &named).to_vec().unwrap_err();
        assert!(
            matches!(&err, RpcClientError::Encode { method, .. } if method == "mc_getBalance"),
            "unexpected error: {err}"
        );

        let scalar = "latest";
        assert!(Request::new("mc_getBalance", &scalar).to_vec().is_err());
        let object = json!({"address": "0xabc"});
        assert!(Request::new("mc_getBalance", &object).to_vec().is_err());
    }

    #[test]
    fn result_is_returned_raw() {
        let raw = parse_response(
            "mc_getBalance",
            br#"{"id":1,"jsonrpc":"2.0","result":"0xde0b6b3a7640000"}"#,
        )
        .unwrap();
        assert_eq!(raw.get(), r#""0xde0b6b3a7640000""#);
    }

    #[test]
    fn error_wins_over_result() {
        let err = parse_response(
            "mc_getBalance",
            br#"{"id":1,"jsonrpc":"2.0","result":"0x1","error":{"code":-32000,"message":"header not found"}}"#,
        )
        .unwrap_err();

        assert_eq!(
            err.rpc_error(),
            Some(&RpcError {
                code: -32000,
                message: "header not found".into()
            })
        );
    }

    #[test]
    fn missing_result_is_null() {
        let raw = parse_response("mc_getTransactionReceipt", br#"{"id":1,"jsonrpc":"2.0"}"#)
            .unwrap();
        assert_eq!(raw.get(), "null");

        let raw = parse_response(
            "mc_getTransactionReceipt",
            br#"{"id":1,"jsonrpc":"2.0","result":null}"#,
        )
        .unwrap();
        assert_eq!(raw.get(), "null");
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = parse_response("net_version", b"<html>502 Bad Gateway</html>").unwrap_err();

        match err {
            RpcClientError::Decode {
                method, payload, ..
            } => {
                assert_eq!(method, "net_version");
                assert_eq!(payload, "<html>502 Bad Gateway</html>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
