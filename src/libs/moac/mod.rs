//! The MOAC JSON‑RPC client and helpers.  [`client::MoacRpc`] maps
//! each node method onto a typed call; [`spells`] adds balance and
//! unit conversion helpers on top.
pub mod client;
pub mod envelope;
pub mod error;
pub mod spells;
pub mod transport;

pub use client::MoacRpc;
pub use error::{DecodeErrorKind, RpcClientError, RpcError};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
