//! Nano RPC client library.
//!
//! Provides an async HTTP client for the Nano node RPC interface: a typed
//! method per RPC action on top of a single action-dispatch call with
//! optional authentication and retry with linear backoff.
//!
//! # Example
//!
//! ```ignore
//! use nano_rpc::NanoRpc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let node = NanoRpc::new("http://localhost:7076");
//!     let version = node.version().await.unwrap();
//!     println!("Node vendor: {}", version.node_vendor);
//! }
//! ```

pub mod client;
pub mod error;
pub mod node;

pub use client::{AuthScheme, LogFacade, LogSink, RpcClient, RpcConfig};
pub use error::RpcError;
pub use node::NanoRpc;

/// Default RPC ports.
pub mod ports {
    pub const RPC_MAINNET: u16 = 7076;
    pub const RPC_BETA: u16 = 55000;
    pub const RPC_TEST: u16 = 17076;
}
