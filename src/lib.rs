//! Blocking, strongly typed client for the MOAC node JSON‑RPC API.
//!
//! ```no_run
//! use moacrpc::MoacRpc;
//!
//! let client = MoacRpc::new("http://127.0.0.1:8545")?;
//! let balance = client.mc_get_balance("0x57d83802a772adf506a89f5021c93a05749e3c6e", "latest")?;
//! println!("{}", moacrpc::libs::moac::spells::format_moac(balance));
//! # Ok::<(), moacrpc::RpcClientError>(())
//! ```
pub mod constants;
pub mod libs;

pub use libs::logger::{FileLogger, Logger, StderrLogger};
pub use libs::moac::{
    HttpResponse, HttpTransport, MoacRpc, ReqwestTransport, RpcClientError, RpcError,
};
pub use mctypes::{self as types, moac1};
